//! egui front-end. Draws a `view::Screen` and turns clicks into intents.

use std::sync::Arc;

use eframe::egui::{self, Color32, RichText};
use tenki_core::UiConfig;
use tenki_jma::Rgb;

use crate::app_services::AppServices;
use crate::fonts;
use crate::models::{AppState, StatusTone};
use crate::services::{request_catalog, request_forecast};
use crate::view::{self, CardView, Header, Intent, Screen, Sidebar, SidebarBody};

const PAGE_BACKGROUND: Color32 = Color32::from_rgb(0xF5, 0xF7, 0xFA);
const SIDEBAR_WIDTH: f32 = 260.0;
const STATUS_NEUTRAL: Color32 = Color32::from_rgb(0x61, 0x61, 0x61);
const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x19, 0x76, 0xD2);
const STATUS_ERROR: Color32 = Color32::from_rgb(0xF4, 0x43, 0x36);
const HEADER_ACCENT: Color32 = Color32::from_rgb(0x15, 0x65, 0xC0);

pub struct TenkiApp {
    services: Arc<AppServices>,
    state: AppState,
}

impl TenkiApp {
    /// Set up fonts and the repaint hook, then start loading the catalog.
    pub fn new(cc: &eframe::CreationContext<'_>, services: Arc<AppServices>, ui: &UiConfig) -> Self {
        fonts::install_japanese_fonts(&cc.egui_ctx, ui.font_path.as_deref());
        cc.egui_ctx.set_visuals(egui::Visuals::light());

        let ctx = cc.egui_ctx.clone();
        services.set_repaint_hook(Some(Arc::new(move || ctx.request_repaint())));
        request_catalog(&services);

        Self {
            services,
            state: AppState::new(),
        }
    }

    fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::SelectOffice { code, name } => {
                let token = self.state.select_office(&code, &name);
                request_forecast(&self.services, token, &code, &name);
            }
        }
    }
}

impl eframe::App for TenkiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for message in self.services.drain() {
            self.state.apply(message);
        }

        let screen = view::render(&self.state);
        let mut intents = Vec::new();
        draw(ctx, &screen, &mut intents);

        for intent in intents {
            self.handle(intent);
        }
    }
}

fn draw(ctx: &egui::Context, screen: &Screen, intents: &mut Vec<Intent>) {
    egui::SidePanel::left("catalog")
        .exact_width(SIDEBAR_WIDTH)
        .resizable(false)
        .frame(egui::Frame::none().fill(Color32::WHITE).inner_margin(12.0))
        .show(ctx, |ui| draw_sidebar(ui, &screen.sidebar, intents));

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(PAGE_BACKGROUND).inner_margin(20.0))
        .show(ctx, |ui| {
            draw_header(ui, &screen.header);
            ui.add_space(12.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for card in &screen.cards {
                        draw_card(ui, card);
                        ui.add_space(10.0);
                    }
                });
        });
}

fn draw_sidebar(ui: &mut egui::Ui, sidebar: &Sidebar, intents: &mut Vec<Intent>) {
    ui.label(RichText::new(sidebar.heading).size(18.0).strong());
    ui.separator();

    match &sidebar.body {
        SidebarBody::Loading(text) => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(*text);
            });
        }
        SidebarBody::Failed { message, hint } => {
            ui.label(RichText::new(message).color(STATUS_ERROR));
            ui.label(RichText::new(*hint).small().weak());
        }
        SidebarBody::Groups(groups) => {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for group in groups {
                        egui::CollapsingHeader::new(group.name.as_str())
                            .show(ui, |ui| {
                                for office in &group.offices {
                                    if ui.selectable_label(office.selected, office.name.as_str()).clicked() {
                                        intents.push(Intent::SelectOffice {
                                            code: office.code.clone(),
                                            name: office.name.clone(),
                                        });
                                    }
                                }
                            });
                    }
                });
        }
    }
}

fn draw_header(ui: &mut egui::Ui, header: &Header) {
    let color = match header.tone {
        StatusTone::Neutral => STATUS_NEUTRAL,
        StatusTone::Success => STATUS_SUCCESS,
        StatusTone::Error => STATUS_ERROR,
    };

    ui.horizontal(|ui| {
        ui.label(RichText::new("☁").size(28.0).color(HEADER_ACCENT));
        ui.label(RichText::new(header.heading).size(24.0).strong());
        ui.add_space(16.0);
        if header.loading {
            ui.spinner();
        }
        ui.label(RichText::new(&header.status).color(color));
    });

    if let Some(hint) = header.hint {
        ui.label(RichText::new(hint).small().weak());
    }
}

fn draw_card(ui: &mut egui::Ui, card: &CardView) {
    egui::Frame::none()
        .fill(Color32::WHITE)
        .rounding(10.0)
        .inner_margin(14.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(&card.title).size(18.0).strong());
            ui.separator();

            for row in &card.rows {
                egui::Frame::none()
                    .fill(to_color(row.background))
                    .rounding(8.0)
                    .inner_margin(10.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(row.glyph).size(26.0));
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&row.date_label).strong())
                                    .on_hover_text(row.icon);
                                ui.label(row.text.as_str());
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        });
}

fn to_color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}
