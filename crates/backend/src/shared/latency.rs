//! Simulated network latency
//!
//! Сервисы справочников имитируют сетевой вызов: каждая операция сначала
//! ожидает `Latency::delay`, затем синхронно работает с хранилищем.
//! Реализация задержки зависит от рантайма (tokio нативно, таймеры браузера в wasm).

use async_trait::async_trait;

#[async_trait(?Send)]
pub trait Latency: Send + Sync {
    async fn delay(&self);
}

/// Без задержки (тесты и синхронные выгрузки)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLatency;

#[async_trait(?Send)]
impl Latency for NoLatency {
    async fn delay(&self) {}
}

/// Задержка через `tokio::time::sleep`
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy)]
pub struct TokioLatency(pub std::time::Duration);

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Latency for TokioLatency {
    async fn delay(&self) {
        if !self.0.is_zero() {
            tokio::time::sleep(self.0).await;
        }
    }
}

/// Удобный конструктор для нативной задержки из конфигурации
#[cfg(not(target_arch = "wasm32"))]
pub fn tokio_latency(duration: std::time::Duration) -> std::sync::Arc<dyn Latency> {
    if duration.is_zero() {
        std::sync::Arc::new(NoLatency)
    } else {
        std::sync::Arc::new(TokioLatency(duration))
    }
}
