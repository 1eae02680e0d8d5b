//! 跨平台日志模块
//!
//! 在 wasm32 目标上写入浏览器 console，在原生目标上写入 stdout/stderr，
//! 因此领域逻辑可以直接在宿主机上运行单元测试。

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn __info(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn __info(msg: &str) {
    println!("{}", msg);
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn __warn(msg: &str) {
    web_sys::console::warn_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn __warn(msg: &str) {
    eprintln!("{}", msg);
}

#[cfg(target_arch = "wasm32")]
#[doc(hidden)]
pub fn __error(msg: &str) {
    web_sys::console::error_1(&msg.into());
}

#[cfg(not(target_arch = "wasm32"))]
#[doc(hidden)]
pub fn __error(msg: &str) {
    eprintln!("{}", msg);
}

#[macro_export]
macro_rules! log_info {
    ($($t:tt)*) => ($crate::log::__info(&format!($($t)*)))
}

#[macro_export]
macro_rules! log_warn {
    ($($t:tt)*) => ($crate::log::__warn(&format!($($t)*)))
}

#[macro_export]
macro_rules! log_error {
    ($($t:tt)*) => ($crate::log::__error(&format!($($t)*)))
}
