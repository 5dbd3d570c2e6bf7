use std::time::Duration;

use eframe::egui::Ui;

use crate::timer::Timer;

/// A notice that expires on its own, such as "Copied to clipboard".
pub struct Message {
    text: String,
    timer: Timer,
}

impl Message {
    pub fn new(text: String) -> Message {
        Message {
            text,
            timer: Timer::default(),
        }
    }

    #[allow(unused)]
    pub fn new_with_duration(text: String, duration: Duration) -> Message {
        Message {
            text,
            timer: Timer::new(duration),
        }
    }

    pub fn display(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(self.text.as_str());
        });
    }

    pub fn is_complete(&self) -> bool {
        self.timer.is_complete()
    }
}
