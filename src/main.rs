mod boot;
mod canvas_app;
mod input;
mod renderer;

#[cfg(target_arch = "wasm32")]
fn main() {
    if let Err(err) = canvas_app::start() {
        boot::fail("start", "failed to start the puzzle", &format!("{err:?}"));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("suraido renders in the browser; build it with trunk, or play in the terminal with suraido-cli");
}
