fn main() {
    chibagen::cli::run();
}
