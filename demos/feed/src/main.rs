use log::info;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());

    let bound = like_toggle::start();

    info!("{bound} like buttons ready");
}
