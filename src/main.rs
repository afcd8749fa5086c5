fn main() -> anyhow::Result<()> {
    neovimqt_gen::run()
}
