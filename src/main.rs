fn main() {
    env_logger::init();
    solitaire_chess::shell::run_shell_loop();
}
