//! Projects gallery overlay.
//!
//! A static card list in a toggleable floating window; pure presentation.

use super::style;

/// One portfolio project card.
pub struct Project {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
}

pub const PROJECTS: [Project; 5] = [
    Project {
        name: "Dashcam Footage Analyzer",
        description: "A tool that analyzes dashcam footage for safety and insurance purposes.",
        image: "dashcam-image.jpg",
    },
    Project {
        name: "CData",
        description: "A comprehensive data management and analysis platform.",
        image: "cdata-image.jpg",
    },
    Project {
        name: "Last Stop",
        description: "An innovative public transportation app for efficient travel planning.",
        image: "last-stop-image.jpg",
    },
    Project {
        name: "GlobeNews",
        description: "A global news aggregator with personalized content delivery.",
        image: "globenews-image.jpg",
    },
    Project {
        name: "Job Fit",
        description: "An AI-powered job matching platform for job seekers and employers.",
        image: "job-fit-image.jpg",
    },
];

/// Gallery visibility state.
#[derive(Default)]
pub struct ProjectsGallery {
    pub visible: bool,
}

impl ProjectsGallery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

/// Draw the toggle button and, when open, the gallery window.
pub fn draw_projects(ctx: &egui::Context, gallery: &mut ProjectsGallery) {
    egui::Area::new(egui::Id::new("projects_toggle"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            if ui.button("Projects").clicked() {
                gallery.toggle();
            }
        });

    if !gallery.visible {
        return;
    }

    egui::Window::new("Projects")
        .frame(style::panel_frame())
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .collapsible(false)
        .resizable(false)
        .min_width(420.0)
        .max_height(480.0)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for project in &PROJECTS {
                    ui.add_space(4.0);
                    ui.heading(project.name);
                    ui.label(project.description);
                    ui.label(
                        egui::RichText::new(project.image)
                            .small()
                            .color(style::colors::TEXT_MUTED),
                    );
                    ui.add_space(4.0);
                    ui.separator();
                }
            });
        });
}
