//! Progress reporting for collection fetches

use colored::Colorize;
use gateway_application::ProgressNotifier;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with one spinner per collection being fetched
pub struct ProgressReporter {
    multi: MultiProgress,
    bars: Mutex<HashMap<String, ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bars: Mutex::new(HashMap::new()),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {msg}")
            .unwrap()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, collection: &str) {
        let pb = self.multi.add(ProgressBar::new_spinner());
        pb.set_style(Self::spinner_style());
        pb.set_prefix(collection.to_string());
        pb.set_message("Fetching...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut bars) = self.bars.lock() {
            bars.insert(collection.to_string(), pb);
        }
    }

    fn on_page_loaded(&self, collection: &str, page: u32, total_items: usize) {
        if let Ok(bars) = self.bars.lock()
            && let Some(pb) = bars.get(collection)
        {
            pb.set_message(format!("page {} ({} items)", page, total_items));
        }
    }

    fn on_fetch_complete(&self, collection: &str, total_items: usize, degraded: bool) {
        let Some(pb) = self.bars.lock().ok().and_then(|mut bars| bars.remove(collection)) else {
            return;
        };

        if degraded {
            pb.finish_with_message(format!(
                "{} {} items (incomplete)",
                "!".yellow(),
                total_items
            ));
        } else {
            pb.finish_with_message(format!("{} {} items", "v".green(), total_items));
        }
    }
}
