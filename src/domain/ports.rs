use crate::domain::model::{
    DurationFilter, ListResponse, MenuEntry, MenuFilter, ReservationEntry,
};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
    fn utc_offset_hours(&self) -> i32;
}

/// The remote RestoOps backend, consumed as a JSON contract.
#[async_trait]
pub trait RestoApi: Send + Sync {
    async fn fetch_menu(&self, filter: MenuFilter) -> Result<ListResponse<MenuEntry>>;
    async fn fetch_reservations(
        &self,
        filter: DurationFilter,
    ) -> Result<ListResponse<ReservationEntry>>;
}
