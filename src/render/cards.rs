use crate::core::view::{MenuPage, ReservationPage, ViewState};
use crate::domain::model::{DurationFilter, MenuEntry, MenuFilter, ReservationEntry};
use crate::render::format::{format_date, format_date_time, format_price};
use chrono::FixedOffset;
use url::Url;

/// What every renderer needs besides the data itself.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub api_base_url: String,
    pub offset: FixedOffset,
}

impl RenderContext {
    pub fn new(api_base_url: impl Into<String>, offset: FixedOffset) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            offset,
        }
    }

    /// `localhost:8001` style label for the backend.
    fn backend_host(&self) -> String {
        Url::parse(&self.api_base_url)
            .ok()
            .and_then(|url| {
                let host = url.host_str()?.to_string();
                Some(match url.port() {
                    Some(port) => format!("{}:{}", host, port),
                    None => host,
                })
            })
            .unwrap_or_else(|| self.api_base_url.clone())
    }

    fn docs_url(&self) -> String {
        format!("{}/docs", self.api_base_url.trim_end_matches('/'))
    }
}

pub fn render_landing(ctx: &RenderContext) -> String {
    let mut lines = vec![
        "RestoOps".to_string(),
        "Restaurant Operations Management System".to_string(),
        "Frontend Client untuk Testing API Backend".to_string(),
        String::new(),
        "API Backend Status".to_string(),
        format!("  Backend URL       : {}", ctx.api_base_url),
        format!("  API Documentation : {}", ctx.docs_url()),
        String::new(),
        "Menu".to_string(),
        "  Lihat daftar menu restoran lengkap dengan harga dan varian".to_string(),
        "  Endpoint: GET /menu/        →  restoops menu".to_string(),
        String::new(),
        "Reservasi".to_string(),
        "  Lihat daftar reservasi pelanggan lengkap dengan detail pesanan".to_string(),
        "  Endpoint: GET /reservation/ →  restoops reservations".to_string(),
        String::new(),
        "Cara Penggunaan".to_string(),
        format!("  1. Pastikan backend API berjalan di {}", ctx.backend_host()),
    ];
    lines.extend([
        "  2. Jalankan `restoops menu` untuk melihat daftar menu".to_string(),
        "  3. Jalankan `restoops reservations` untuk melihat daftar reservasi".to_string(),
        "  4. Gunakan filter untuk melihat data berdasarkan kriteria tertentu".to_string(),
        "  5. Data akan di-fetch secara real-time dari backend API".to_string(),
        String::new(),
        "RestoOps API Client - Testing Frontend for Backend API".to_string(),
    ]);
    lines.join("\n")
}

/// Loading spinner text, error box, or the page itself.
pub fn render_view_state<T>(
    ctx: &RenderContext,
    state: &ViewState<T>,
    loading_message: &str,
    render_page: impl FnOnce(&RenderContext, &T) -> String,
) -> String {
    match state {
        ViewState::Loading => loading_message.to_string(),
        ViewState::Failed(message) => format!(
            "❌ {}\nPastikan backend API berjalan di {}",
            message, ctx.api_base_url
        ),
        ViewState::Loaded(page) => render_page(ctx, page),
    }
}

pub fn render_menu_state(ctx: &RenderContext, state: &ViewState<MenuPage>) -> String {
    render_view_state(ctx, state, "Memuat data menu...", render_menu_page)
}

pub fn render_reservation_state(ctx: &RenderContext, state: &ViewState<ReservationPage>) -> String {
    render_view_state(ctx, state, "Memuat data reservasi...", render_reservation_page)
}

fn filter_bar<T: PartialEq + Copy>(
    label: &str,
    options: &[T],
    active: T,
    name: impl Fn(T) -> String,
) -> String {
    let buttons: Vec<String> = options
        .iter()
        .map(|opt| {
            if *opt == active {
                format!("[{}]", name(*opt))
            } else {
                format!(" {} ", name(*opt))
            }
        })
        .collect();
    format!("{} {}", label, buttons.join(" "))
}

pub fn render_menu_page(ctx: &RenderContext, page: &MenuPage) -> String {
    let mut lines = vec![
        "RestoOps Menu".to_string(),
        "Daftar menu restoran dari API Backend".to_string(),
        filter_bar(
            "Filter:",
            &[MenuFilter::All, MenuFilter::Available, MenuFilter::SoldOut],
            page.filter,
            |f: MenuFilter| f.label().to_string(),
        ),
        String::new(),
        format!("{} menu ditemukan", page.response.count),
    ];

    for item in &page.response.data {
        lines.push(String::new());
        lines.push(render_menu_card(ctx, item));
    }
    lines.join("\n")
}

pub fn render_menu_card(ctx: &RenderContext, item: &MenuEntry) -> String {
    let badge = if item.is_sold_out() {
        "Sold Out"
    } else {
        "Tersedia"
    };

    let mut lines = vec![
        format!("┌ {}", item.name),
        format!("│ {}  [{}]", format_price(item.price), badge),
    ];
    if let Some(image_url) = &item.image_url {
        lines.push(format!("│ Gambar: {}", image_url));
    }
    if !item.variants().is_empty() {
        lines.push(format!("│ Variants: {}", item.variants().join(", ")));
    }
    lines.extend([
        format!("│ ID: {}", item.id),
        format!("│ Dibuat: {}", format_date(item.created_at.as_deref(), ctx.offset)),
        format!("│ Update: {}", format_date(item.updated_at.as_deref(), ctx.offset)),
        "└".to_string(),
    ]);
    lines.join("\n")
}

pub fn render_reservation_page(ctx: &RenderContext, page: &ReservationPage) -> String {
    let mut lines = vec![
        "RestoOps Reservations".to_string(),
        "Daftar reservasi pelanggan dari API Backend".to_string(),
        filter_bar(
            "Filter Durasi:",
            &DurationFilter::PRESETS,
            page.filter,
            |f: DurationFilter| f.to_string(),
        ),
    ];
    if let DurationFilter::AtLeast(hours) = page.filter {
        if !DurationFilter::PRESETS.contains(&page.filter) {
            lines.push(format!("Filter aktif: ≥ {} Jam", hours));
        }
    }
    lines.push(String::new());
    lines.push(format!("{} reservasi ditemukan", page.response.count));

    for item in &page.response.data {
        lines.push(String::new());
        lines.push(render_reservation_card(ctx, page, item));
    }
    lines.join("\n")
}

pub fn render_reservation_card(
    ctx: &RenderContext,
    page: &ReservationPage,
    item: &ReservationEntry,
) -> String {
    let mut lines = vec![
        format!("┌ {}  (Meja {})", item.name, item.table),
        format!("│ Token: {}", item.token),
        format!("│ Durasi Reservasi: {} Jam", item.duration),
    ];

    let orders = page.decoded_orders(item);
    if !orders.is_empty() {
        lines.push("│ Menu yang Dipesan:".to_string());
        for order in orders {
            lines.push(format!("│   • {}", order.menu_name));
            if let Some(variant) = &order.variant {
                lines.push(format!("│     Variants: {}", variant));
            }
            lines.push(format!("│     Menu ID: {}", order.menu_id));
            if let Some(image_url) = &order.image_url {
                lines.push(format!("│     Gambar: {}", image_url));
            }
        }
    }

    lines.extend([
        format!("│ ID Reservasi: {}", item.id),
        format!(
            "│ Dibuat: {}",
            format_date_time(item.created_at.as_deref(), ctx.offset)
        ),
        format!(
            "│ Update: {}",
            format_date_time(item.updated_at.as_deref(), ctx.offset)
        ),
        "└".to_string(),
    ]);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::order::MenuLookup;
    use crate::domain::model::{ListResponse, SoldOut};
    use crate::render::format::display_offset;

    fn ctx() -> RenderContext {
        RenderContext::new("http://localhost:8001", display_offset(7))
    }

    fn nasi_goreng() -> MenuEntry {
        MenuEntry {
            id: 5,
            name: "Nasi Goreng".to_string(),
            price: 25000,
            variants: Some(vec!["Pedas".to_string(), "Original".to_string()]),
            sold_out: SoldOut::No,
            created_at: Some("2024-01-15T10:30:00".to_string()),
            updated_at: Some("2024-01-16T08:00:00".to_string()),
            image_url: Some("https://img.example.com/nasi.jpg".to_string()),
        }
    }

    #[test]
    fn test_landing_mentions_backend_and_docs() {
        let text = render_landing(&ctx());
        assert!(text.contains("http://localhost:8001/docs"));
        assert!(text.contains("GET /menu/"));
        assert!(text.contains("GET /reservation/"));
        assert!(text.contains("Pastikan backend API berjalan di localhost:8001"));
    }

    #[test]
    fn test_menu_card_available_with_variants() {
        let card = render_menu_card(&ctx(), &nasi_goreng());
        assert!(card.contains("┌ Nasi Goreng"));
        assert!(card.contains("Rp 25.000  [Tersedia]"));
        assert!(card.contains("Variants: Pedas, Original"));
        assert!(card.contains("Gambar: https://img.example.com/nasi.jpg"));
        assert!(card.contains("Dibuat: 15/1/2024"));
        assert!(card.contains("Update: 16/1/2024"));
    }

    #[test]
    fn test_menu_card_sold_out_without_optional_parts() {
        let mut item = nasi_goreng();
        item.sold_out = SoldOut::Yes;
        item.variants = Some(vec![]);
        item.image_url = None;

        let card = render_menu_card(&ctx(), &item);
        assert!(card.contains("[Sold Out]"));
        assert!(!card.contains("Variants:"));
        assert!(!card.contains("Gambar:"));
    }

    #[test]
    fn test_menu_page_header_marks_active_filter() {
        let page = MenuPage {
            filter: MenuFilter::SoldOut,
            response: ListResponse {
                count: 0,
                data: vec![],
            },
        };
        let text = render_menu_page(&ctx(), &page);
        assert!(text.contains("[Sold Out]"));
        assert!(text.contains(" Semua "));
        assert!(text.contains("0 menu ditemukan"));
    }

    #[test]
    fn test_reservation_card_decodes_orders() {
        let page = ReservationPage {
            filter: DurationFilter::AtLeast(3),
            response: ListResponse::default(),
            lookup: MenuLookup::from_entries(vec![nasi_goreng()]),
        };
        let reservation = ReservationEntry {
            id: 10,
            name: "Budi".to_string(),
            table: 4,
            token: "TKN-1".to_string(),
            ordered_menu: vec!["5[Extra Spicy]".to_string(), "99".to_string()],
            duration: 3,
            created_at: Some("2024-01-15T03:30:00Z".to_string()),
            updated_at: None,
        };

        let card = render_reservation_card(&ctx(), &page, &reservation);
        assert!(card.contains("┌ Budi  (Meja 4)"));
        assert!(card.contains("Durasi Reservasi: 3 Jam"));
        assert!(card.contains("• Nasi Goreng"));
        assert!(card.contains("Variants: Extra Spicy"));
        assert!(card.contains("Gambar: https://img.example.com/nasi.jpg"));
        assert!(card.contains("• Menu #99"));
        assert!(card.contains("Menu ID: 99"));
        assert!(card.contains("Dibuat: 15 Jan 2024, 10.30"));
        assert!(card.contains("Update: -"));
    }

    #[test]
    fn test_reservation_card_without_orders_omits_section() {
        let page = ReservationPage {
            filter: DurationFilter::All,
            response: ListResponse::default(),
            lookup: MenuLookup::default(),
        };
        let reservation = ReservationEntry {
            id: 1,
            name: "Sari".to_string(),
            table: 2,
            token: "T".to_string(),
            ordered_menu: vec![],
            duration: 1,
            created_at: None,
            updated_at: None,
        };
        let card = render_reservation_card(&ctx(), &page, &reservation);
        assert!(!card.contains("Menu yang Dipesan"));
    }

    #[test]
    fn test_custom_duration_filter_is_shown() {
        let page = ReservationPage {
            filter: DurationFilter::AtLeast(7),
            response: ListResponse::default(),
            lookup: MenuLookup::default(),
        };
        let text = render_reservation_page(&ctx(), &page);
        assert!(text.contains("Filter aktif: ≥ 7 Jam"));
        assert!(!text.contains("[Semua]"));
    }

    #[test]
    fn test_view_state_rendering() {
        let loading: ViewState<MenuPage> = ViewState::Loading;
        assert_eq!(render_menu_state(&ctx(), &loading), "Memuat data menu...");

        let failed: ViewState<ReservationPage> =
            ViewState::Failed("Gagal mengambil data reservasi".to_string());
        let text = render_reservation_state(&ctx(), &failed);
        assert!(text.starts_with("❌ Gagal mengambil data reservasi"));
        assert!(text.contains("Pastikan backend API berjalan di http://localhost:8001"));
    }
}
