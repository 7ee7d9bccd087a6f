mod app;

fn main() {
    console_error_panic_hook::set_once();
    let config = app::config::load_from_page();
    app::mount_widgets(config);
}
