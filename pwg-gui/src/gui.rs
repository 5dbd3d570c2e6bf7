pub mod message;

use crate::config;
use crate::gui::message::Message;

use eframe::egui;
use log::info;

use pwg_lib::generator::{generate_password, SamplingMode};
use pwg_lib::options::GeneratorOptions;
use pwg_lib::validate::{parse_length, ValidationError};
use pwg_lib::zeroize::{Zeroize, Zeroizing};

pub struct Gui {
    scale: f32,
    update_scale: bool,
    dark: bool,
    update_visuals: bool,

    length_input: String,
    touched: bool,
    error: Option<ValidationError>,
    options: GeneratorOptions,
    password: Zeroizing<String>,
    generated: bool,
    messages: Vec<Message>,
}

impl Default for Gui {
    fn default() -> Self {
        Self {
            scale: 2.0,
            update_scale: true,
            dark: true,
            update_visuals: true,
            length_input: String::new(),
            touched: false,
            error: None,
            options: GeneratorOptions::default(),
            password: Zeroizing::new(String::new()),
            generated: false,
            messages: Vec::new(),
        }
    }
}

impl eframe::App for Gui {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.update_scale {
            ctx.set_pixels_per_point(self.scale);
            self.update_scale = false;
        }

        if self.update_visuals {
            if self.dark {
                ctx.set_visuals(egui::Visuals::dark());
            } else {
                ctx.set_visuals(egui::Visuals::light());
            }
            self.update_visuals = false;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.display_header(ui);
            self.display_form(ui);
            self.display_result(ui);
            Gui::display_messages(&mut self.messages, ui);
        });

        // Expired notices only disappear on a repaint, so keep the frames
        // coming while any are on screen.
        if !self.messages.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }
}

impl Gui {
    pub fn new_from_config() -> Self {
        let config = config::get_config();
        let mut gui = Gui::default();

        if let Some(scale) = config["scale"].as_f32() {
            gui.scale = scale;
        }
        if let Some(dark) = config["dark"].as_bool() {
            gui.dark = dark;
        }

        gui
    }

    fn save_config(&self) {
        config::write_config(json::object! {
            dark: self.dark,
            scale: self.scale
        });
    }

    fn display_header(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.menu_button("Options", |ui| {
                if !ui
                    .add(egui::Slider::new(&mut self.scale, 1.0..=3.0).text("UI Scale"))
                    .dragged()
                {
                    self.update_scale = true;
                } else {
                    self.update_scale = false;
                };

                if ui.checkbox(&mut self.dark, "Dark mode").changed() {
                    self.update_visuals = true;
                }

                if ui.button("Save as default").clicked() {
                    self.save_config();
                    ui.close_menu();
                }
            });
        });

        ui.separator();
    }

    fn display_form(&mut self, ui: &mut egui::Ui) {
        ui.heading("Create a Solid Password");
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            ui.label("Password Length");
            let response = ui.add_sized(
                [100.0, 20.0],
                egui::TextEdit::singleline(&mut self.length_input).hint_text("Ex 8"),
            );

            if response.changed() {
                self.touched = true;
                self.error = parse_length(self.length_input.as_str()).err();
            }
        });
        ui.label("*min 8 characters and max 16 characters");

        if self.touched {
            if let Some(error) = self.error {
                ui.colored_label(egui::Color32::DARK_RED, error.to_string());
            }
        }

        ui.add_space(6.0);
        ui.checkbox(&mut self.options.lowercase, "Includes lowercase");
        ui.checkbox(&mut self.options.uppercase, "Includes uppercase");
        ui.checkbox(&mut self.options.digits, "Includes numbers");
        ui.checkbox(&mut self.options.symbols, "Includes symbols");

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Generate Password").clicked() {
                self.generate();
            }
            if ui.button("Reset Password").clicked() {
                self.reset();
            }
        });
    }

    fn display_result(&mut self, ui: &mut egui::Ui) {
        if !self.generated {
            return;
        }

        ui.separator();
        ui.horizontal(|ui| {
            let text = egui::RichText::new(self.password.as_str())
                .monospace()
                .size(20.0)
                .strong();
            ui.add(egui::Label::new(text).selectable(true));

            if ui.button("Copy").clicked() {
                let password = self.password.to_string();
                ui.output_mut(|o| {
                    o.copied_text.zeroize();
                    o.copied_text = password;
                });

                self.messages
                    .push(Message::new(String::from("Copied to clipboard")));
                info!("password copied to clipboard");
            }
        });
    }

    fn display_messages(messages: &mut Vec<Message>, ui: &mut egui::Ui) {
        if messages.len() <= 0 {
            return;
        }

        ui.separator();

        let mut count = 0;
        let mut remove_list = Vec::<usize>::new();

        for message in messages.iter() {
            if !message.is_complete() {
                message.display(ui);
            } else {
                remove_list.push(count);
            }
            count += 1;
        }

        // Remove list goes backwards
        remove_list.reverse();

        for i in remove_list {
            messages.remove(i);
        }
    }

    fn generate(&mut self) {
        self.touched = true;

        match parse_length(self.length_input.as_str()) {
            Ok(length) => {
                self.error = None;
                self.options.length = length;
                self.password = generate_password(&self.options, SamplingMode::Uniform);
                self.generated = true;
                info!(
                    "generated a {} character password from {} enabled classes",
                    self.password.len(),
                    self.options.class_count()
                );
            }
            Err(error) => {
                self.error = Some(error);
            }
        }
    }

    fn reset(&mut self) {
        self.options = GeneratorOptions::default();
        self.length_input.clear();
        self.touched = false;
        self.error = None;
        self.password = Zeroizing::new(String::new());
        self.generated = false;
        info!("options reset to defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::Gui;
    use pwg_lib::validate::ValidationError;

    #[test]
    fn test_generate_rejects_short_length() {
        let mut gui = Gui::default();
        gui.length_input = String::from("2");

        gui.generate();

        assert_eq!(gui.error, Some(ValidationError::BelowMinimum));
        assert!(!gui.generated);
        assert_eq!(gui.password.as_str(), "");
    }

    #[test]
    fn test_generate_rejects_empty_length() {
        let mut gui = Gui::default();

        gui.generate();

        assert_eq!(gui.error, Some(ValidationError::Empty));
        assert!(!gui.generated);
    }

    #[test]
    fn test_generate_then_reset() {
        let mut gui = Gui::default();
        gui.length_input = String::from("8");
        gui.options.digits = true;

        gui.generate();
        assert!(gui.generated);
        assert_eq!(gui.error, None);
        assert_eq!(gui.password.len(), 8);

        gui.reset();
        assert!(!gui.generated);
        assert!(gui.options.lowercase);
        assert!(!gui.options.digits);
        assert_eq!(gui.length_input, "");
        assert_eq!(gui.password.as_str(), "");
        assert_eq!(gui.error, None);
        assert!(!gui.touched);
    }

    #[test]
    fn test_rejected_submit_keeps_previous_password() {
        let mut gui = Gui::default();
        gui.length_input = String::from("8");
        gui.generate();

        let previous = gui.password.to_string();

        gui.length_input = String::from("17");
        gui.generate();

        assert_eq!(gui.error, Some(ValidationError::AboveMaximum));
        assert_eq!(gui.password.as_str(), previous.as_str());
    }
}
