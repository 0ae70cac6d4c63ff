#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Battery { percent: u8, charging: bool }, // New battery reading, redraw the page
    DirtyDisplay, // Canvas changed, push it to the sink
    Shutdown,     // Signal to exit the application
}
