use eframe::egui;

use folio_core::catalog::Catalog;
use folio_core::shell::{Mode, Shell, TouchAction};
use folio_core::view::{Body, Screen};
use folio_core::{FolioError, Result};

pub fn run(catalog: Catalog) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "folio",
        options,
        Box::new(|_cc| Ok(Box::new(FolioApp::new(catalog)))),
    )
    .map_err(|e| FolioError::Gui(e.to_string()))?;

    Ok(())
}

struct FolioApp {
    shell: Shell,
}

impl FolioApp {
    fn new(catalog: Catalog) -> Self {
        Self {
            shell: Shell::new(catalog, Mode::Touch),
        }
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen = self.shell.screen();
        let mut action = None;

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.heading(&screen.title);
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(path) = &screen.path {
                ui.monospace(format!("> {path}"));
            }

            ui.horizontal(|ui| {
                if screen.can_go_back && ui.button("back").clicked() {
                    action = Some(TouchAction::Back);
                }
                if let Some(url) = &screen.verify_url {
                    ui.hyperlink_to("verify all", url);
                }
            });

            if let Some(error) = &screen.error {
                ui.colored_label(egui::Color32::RED, error);
            }
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(picked) = show_body(ui, &screen) {
                    action = Some(picked);
                }
            });
        });

        if let Some(action) = action {
            self.shell.touch(&action);
        }
    }
}

/// Draw the body; returns the action of a clicked row
fn show_body(ui: &mut egui::Ui, screen: &Screen) -> Option<TouchAction> {
    let mut picked = None;

    match &screen.body {
        Body::Intro { lines, link } => {
            for line in lines {
                ui.monospace(format!("> {line}"));
            }
            if let Some(link) = link {
                ui.hyperlink_to(&link.label, &link.url);
            }
        }
        Body::Directories { rows } | Body::Files { rows, .. } => {
            if let Body::Files { heading, .. } = &screen.body {
                ui.strong(heading);
            }
            for row in rows {
                if ui.button(&row.label).clicked() {
                    picked = Some(row.target.action());
                }
            }
        }
        Body::About(card) => {
            ui.strong("about");
            egui::Grid::new("about").num_columns(2).show(ui, |ui| {
                let mut field = |label: &str, value: &str| {
                    ui.weak(label);
                    ui.label(value);
                    ui.end_row();
                };
                field("name", &card.name);
                field("roles", &card.roles);
                field("location", &card.location);
                if let Some(age) = &card.age {
                    field("age", age);
                }
                field("contact", &card.email);
            });
            ui.add_space(8.0);
            ui.strong("online");
            for link in &card.online {
                ui.hyperlink_to(&link.label, &link.url);
            }
        }
        Body::File(detail) => {
            ui.strong(&detail.heading);
            ui.monospace(format!("> {}", detail.title));
            for line in &detail.meta {
                ui.weak(line);
            }
            if let Some(summary) = &detail.summary {
                ui.add_space(4.0);
                ui.label(summary);
            }
            for line in &detail.bullets {
                ui.label(format!("• {line}"));
            }
            if let Some(link) = &detail.link {
                ui.hyperlink_to("view project", link);
            }
        }
        Body::Certificates { heading, cards } => {
            ui.strong(heading);
            for card in cards {
                ui.group(|ui| {
                    ui.strong(&card.name);
                    ui.label(&card.issuer);
                    ui.weak(&card.validity);
                    if let Some(id) = &card.credential_id {
                        ui.weak(format!("Credential ID: {id}"));
                    }
                });
            }
        }
    }

    picked
}
