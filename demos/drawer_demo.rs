#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use eframe::egui;
use egui_drawer::{
    ContainerLocator, DrawerController, DrawerProps, Handler, HostDocument, HostNode, Placement,
};

struct App {
    /// Lives in the side panel, managed by its own handle.
    uncontrolled: DrawerController,
    /// Portaled into whichever region is selected, opened from the toolbar.
    controlled: DrawerController,
    controlled_open: Arc<AtomicBool>,
    target: &'static str,
    inline: DrawerController,
}

impl Default for App {
    fn default() -> Self {
        let controlled_open = Arc::new(AtomicBool::new(false));
        Self {
            uncontrolled: DrawerController::new("uncontrolled", Self::uncontrolled_props()),
            controlled: DrawerController::new(
                "controlled",
                Self::controlled_props(&controlled_open, "#main"),
            ),
            controlled_open,
            target: "#main",
            inline: DrawerController::new("inline", Self::inline_props()),
        }
    }
}

impl App {
    fn uncontrolled_props() -> DrawerProps {
        DrawerProps::default()
            .container("#side")
            .placement(Placement::Left)
            .on_handle_click(|event| log::info!("handle clicked: {event:?}"))
            .after_visible_change(|open| log::info!("side drawer settled, open={open}"))
            .content(|ui| {
                ui.heading("Side drawer");
                ui.label("Toggled by its handle, closed by the mask or Escape.");
            })
    }

    fn controlled_props(open: &Arc<AtomicBool>, target: &str) -> DrawerProps {
        let on_close = Arc::clone(open);
        DrawerProps::default()
            .open(open.load(Ordering::Relaxed))
            .container(ContainerLocator::selector(target))
            .placement(Placement::Right)
            .handler(Handler::None)
            .on_close(move |_| on_close.store(false, Ordering::Relaxed))
            .on_change(|open| log::info!("controlled drawer open={open}"))
            .content(|ui| {
                ui.heading("Controlled drawer");
                ui.label("Open state lives in the app.");
            })
    }

    fn inline_props() -> DrawerProps {
        DrawerProps::default()
            .inline()
            .placement(Placement::Bottom)
            .wrapper_class_name("inline-wrapper")
            .content(|ui| {
                ui.label("Rendered inline, inside its parent region.");
            })
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut document = HostDocument::from_ctx(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open controlled drawer").clicked() {
                    self.controlled_open.store(true, Ordering::Relaxed);
                }
                ui.separator();
                ui.label("Controlled drawer target:");
                ui.selectable_value(&mut self.target, "#main", "main");
                ui.selectable_value(&mut self.target, "#side", "side");
            });
        });

        let side = egui::SidePanel::left("side")
            .exact_width(320.0)
            .show(ctx, |ui| {
                ui.label("Side region");
                ui.allocate_space(ui.available_size());
            });
        document.insert(
            HostNode::new(egui::Id::new("side"), "aside")
                .with_element_id("side")
                .with_rect(side.response.rect),
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            document.insert(
                HostNode::new(egui::Id::new("main"), "main")
                    .with_element_id("main")
                    .with_rect(ui.max_rect()),
            );

            ui.label("Main region");
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_size(egui::vec2(360.0, 200.0));
                self.inline.show_with_props(ui, &document, Self::inline_props());
            });

            self.uncontrolled
                .show_with_props(ui, &document, Self::uncontrolled_props());
            self.controlled.show_with_props(
                ui,
                &document,
                Self::controlled_props(&self.controlled_open, self.target),
            );
        });
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("egui_drawer demo"),
        ..Default::default()
    };

    eframe::run_native(
        "egui_drawer demo",
        options,
        Box::new(|_cc| Ok(Box::<App>::default())),
    )
}
