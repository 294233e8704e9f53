use async_trait::async_trait;
use backend::shared::latency::Latency;
use gloo_timers::future::TimeoutFuture;

/// Задержка mock-сервисов в браузере (таймеры `setTimeout`)
#[derive(Debug, Clone, Copy)]
pub struct GlooLatency {
    millis: u32,
}

impl GlooLatency {
    pub fn from_millis(millis: u64) -> Self {
        Self {
            millis: u32::try_from(millis).unwrap_or(u32::MAX),
        }
    }
}

#[async_trait(?Send)]
impl Latency for GlooLatency {
    async fn delay(&self) {
        if self.millis > 0 {
            TimeoutFuture::new(self.millis).await;
        }
    }
}
