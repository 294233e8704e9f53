pub mod initialization;
#[cfg(not(target_arch = "wasm32"))]
pub mod tracing;
