fn main() {
    tracker_frontend::main();
}
