use super::*;

impl AppState {
    /// Mount-time cycle: ask for a position, then fetch weather for it.
    pub fn request_position(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let geolocator = Arc::clone(&self.geolocator);
        tracing::debug!(?geolocator, "requesting position");
        spawn_position_request(tx, async move { geolocator.current_position().await });
    }

    pub(crate) fn fetch_located_weather(&mut self, tx: &mpsc::Sender<AppEvent>, coords: Coordinates) {
        self.begin_cycle();
        let client = self.client.clone();
        spawn_fetch_cycle(
            tx,
            async move { client.fetch_current_by_coordinates(coords).await },
            AppEvent::LocatedWeather,
        );
    }

    /// Search cycle for the trimmed query; blank queries are ignored.
    pub fn submit_search(&mut self, tx: &mpsc::Sender<AppEvent>) {
        let city = self.view.query_city.trim().to_string();
        if city.is_empty() {
            return;
        }
        self.view.error_message = None;
        self.begin_cycle();
        tracing::info!(%city, "search started");
        let client = self.client.clone();
        spawn_fetch_cycle(
            tx,
            async move { client.search(&city).await },
            AppEvent::SearchCompleted,
        );
    }

    fn begin_cycle(&mut self) {
        self.pending_cycles += 1;
        self.view.is_loading = true;
        self.mode = AppMode::Loading;
    }

    /// Every settled cycle passes through here before touching the view.
    pub(crate) fn finish_cycle(&mut self) {
        self.pending_cycles = self.pending_cycles.saturating_sub(1);
        self.view.is_loading = self.pending_cycles > 0;
    }
}
