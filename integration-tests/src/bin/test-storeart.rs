fn main() -> eyre::Result<()> {
    storeart::main()
}
