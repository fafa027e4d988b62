fn main() {
    reorg::app::cli::run();
}
