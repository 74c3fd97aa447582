use std::sync::OnceLock;

fn parse_env_u32(name: &str, default: u32) -> u32 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

const DEFAULT_CANVAS_SIZE: u32 = 256;

static CANVAS_SIZE: OnceLock<u32> = OnceLock::new();

/// Side in pixels of images written by the tools, `QR_CANVAS_SIZE`
pub fn canvas_size() -> u32 {
    *CANVAS_SIZE
        .get_or_init(|| parse_env_u32("QR_CANVAS_SIZE", DEFAULT_CANVAS_SIZE).clamp(64, 4096))
}
