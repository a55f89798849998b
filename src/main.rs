use task_board_ui::app;

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = app::start() {
        web_sys::console::error_1(&e.to_string().into());
    }
}
