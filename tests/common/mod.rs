//! Shared test fixtures: stub services and polling helpers.

#![allow(dead_code)]

use std::sync::{Arc, Once};
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

use reqflow::models::{DetailedItem, RequestItem, Status};
use reqflow::requester::RequesterServices;
use reqflow::services::{
    HistoryPage, LoadDetailsService, LoadHistoryService, LoadNewItemsService, SaveEditionService,
    ServiceError,
};

static TRACING: Once = Once::new();

/// Route store tracing through the test harness; silent unless `RUST_LOG`
/// asks for output.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// Poll `cond` until it holds or a two-second deadline passes.
pub async fn wait_until(what: &str, cond: impl Fn() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !cond() {
        if tokio::time::Instant::now() > deadline {
            panic!("timed out waiting for: {what}");
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

/// Give background effect tasks a moment to catch up with published state.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

pub fn status(name: &str) -> Status {
    Status {
        id: name.to_lowercase(),
        letter: name.chars().take(1).collect(),
        name: name.to_string(),
        system_name: name.to_string(),
        color: String::new(),
        fore_color: String::new(),
    }
}

pub fn item(id: &str, subject: &str) -> RequestItem {
    RequestItem {
        id: id.to_string(),
        subject: subject.to_string(),
        subtitle: String::new(),
        status: Status::pending(),
    }
}

pub fn detailed(id: &str, subject: &str) -> DetailedItem {
    DetailedItem {
        description: "full record".to_string(),
        contact_name: "Ana".to_string(),
        contact: "ana@example.com".to_string(),
        ..DetailedItem::from_summary(item(id, subject))
    }
}

pub struct StubHistory {
    result: Result<HistoryPage, ServiceError>,
    pub calls: Mutex<Vec<(usize, Option<String>)>>,
    delay: Duration,
}

impl StubHistory {
    pub fn ok(items: Vec<RequestItem>, total_count: usize, has_more: bool) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(HistoryPage {
                items,
                total_count,
                has_more,
            }),
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        })
    }

    pub fn err(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(ServiceError::new(message)),
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        })
    }

    pub fn slow(
        items: Vec<RequestItem>,
        total_count: usize,
        has_more: bool,
        delay: Duration,
    ) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(HistoryPage {
                items,
                total_count,
                has_more,
            }),
            calls: Mutex::new(Vec::new()),
            delay,
        })
    }
}

#[async_trait]
impl LoadHistoryService for StubHistory {
    async fn load_history(
        &self,
        count: usize,
        from_id: Option<&str>,
    ) -> Result<HistoryPage, ServiceError> {
        self.calls
            .lock()
            .push((count, from_id.map(str::to_string)));
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone()
    }
}

pub struct StubNewItems {
    result: Result<Vec<RequestItem>, ServiceError>,
    pub calls: Mutex<Vec<String>>,
}

impl StubNewItems {
    pub fn ok(items: Vec<RequestItem>) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(items),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn err(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(ServiceError::new(message)),
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl LoadNewItemsService for StubNewItems {
    async fn load_new_items(&self, from_id: &str) -> Result<Vec<RequestItem>, ServiceError> {
        self.calls.lock().push(from_id.to_string());
        self.result.clone()
    }
}

pub struct StubDetails {
    result: Result<DetailedItem, ServiceError>,
    pub calls: Mutex<Vec<String>>,
}

impl StubDetails {
    pub fn ok(item: DetailedItem) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(item),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn err(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(ServiceError::new(message)),
            calls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl LoadDetailsService for StubDetails {
    async fn load_details(&self, id: &str) -> Result<DetailedItem, ServiceError> {
        self.calls.lock().push(id.to_string());
        self.result.clone()
    }
}

pub struct StubSave {
    result: Result<(), ServiceError>,
    pub calls: Mutex<Vec<DetailedItem>>,
    delay: Duration,
}

impl StubSave {
    pub fn ok() -> Arc<Self> {
        Arc::new(Self {
            result: Ok(()),
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        })
    }

    pub fn err(message: &str) -> Arc<Self> {
        Arc::new(Self {
            result: Err(ServiceError::new(message)),
            calls: Mutex::new(Vec::new()),
            delay: Duration::ZERO,
        })
    }

    pub fn slow(delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            result: Ok(()),
            calls: Mutex::new(Vec::new()),
            delay,
        })
    }
}

#[async_trait]
impl SaveEditionService for StubSave {
    async fn save_edition(&self, item: &DetailedItem) -> Result<(), ServiceError> {
        self.calls.lock().push(item.clone());
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.result.clone()
    }
}

/// Service that never resolves; for asserting in-flight cancellation.
pub struct NeverResolves;

#[async_trait]
impl LoadDetailsService for NeverResolves {
    async fn load_details(&self, _id: &str) -> Result<DetailedItem, ServiceError> {
        std::future::pending().await
    }
}

#[async_trait]
impl SaveEditionService for NeverResolves {
    async fn save_edition(&self, _item: &DetailedItem) -> Result<(), ServiceError> {
        std::future::pending().await
    }
}

/// Benign defaults for tests that only exercise composite wiring.
pub fn stub_services() -> RequesterServices {
    RequesterServices {
        load_history: StubHistory::ok(Vec::new(), 0, false),
        load_new_items: StubNewItems::ok(Vec::new()),
        load_details: StubDetails::ok(detailed("42", "Broken sprinkler")),
        save_edition: StubSave::ok(),
    }
}
