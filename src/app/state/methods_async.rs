use super::*;
use super::input::{KeyCommand, key_command, query_char};

impl AppState {
    pub async fn handle_event(
        &mut self,
        event: AppEvent,
        tx: &mpsc::Sender<AppEvent>,
        cli: &Cli,
    ) -> Result<()> {
        match event {
            AppEvent::Bootstrap => self.handle_bootstrap(tx, cli)?,
            AppEvent::TickFrame => self.handle_tick_frame(),
            AppEvent::Input(input) => self.handle_input(input, tx).await?,
            AppEvent::PositionResolved(position) => self.handle_position_resolved(tx, position),
            AppEvent::LocatedWeather(result) => self.handle_located_weather(result),
            AppEvent::SearchCompleted(outcome) => self.handle_search_completed(outcome),
            AppEvent::Quit => self.mode = AppMode::Quit,
        }
        Ok(())
    }

    pub(crate) fn handle_bootstrap(&mut self, tx: &mpsc::Sender<AppEvent>, cli: &Cli) -> Result<()> {
        cli.validate()?;
        start_frame_task(tx.clone(), frame_period(cli.fps, !cli.no_animation));
        if let Some(city) = cli.search_city() {
            self.view.query_city = city;
            self.submit_search(tx);
        } else {
            self.request_position(tx);
        }
        Ok(())
    }

    pub(crate) fn handle_tick_frame(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_at);
        self.last_frame_at = now;
        self.frame_tick = self.frame_tick.saturating_add(1);
        self.particles
            .update(self.view.background().animation(), delta);
    }

    pub(crate) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_press(key, tx).await?;
            }
            Event::Resize(_, _) => self.particles.reset(),
            _ => {}
        }
        Ok(())
    }

    pub(crate) async fn handle_key_press(
        &mut self,
        key: KeyEvent,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        if let Some(command) = key_command(key) {
            match command {
                KeyCommand::Quit => tx.send(AppEvent::Quit).await?,
                KeyCommand::ToggleDarkMode => self.toggle_dark_mode(),
                KeyCommand::ClearQuery => self.view.query_city.clear(),
                KeyCommand::Submit => self.submit_search(tx),
                KeyCommand::Backspace => {
                    self.view.query_city.pop();
                }
            }
            return Ok(());
        }
        if let Some(ch) = query_char(key) {
            self.view.query_city.push(ch);
        }
        Ok(())
    }

    pub(crate) fn handle_position_resolved(
        &mut self,
        tx: &mpsc::Sender<AppEvent>,
        position: Result<Coordinates, GeolocationError>,
    ) {
        match position {
            Ok(coords) => self.fetch_located_weather(tx, coords),
            Err(err) => {
                tracing::info!(error = %err, "location unavailable");
                self.view.current = None;
                self.fail(LookupError::from(err));
            }
        }
    }

    pub(crate) fn handle_located_weather(&mut self, result: Result<CurrentWeather, FetchError>) {
        self.finish_cycle();
        match result {
            Ok(current) => {
                tracing::info!(location = %current.location_name, "location weather loaded");
                self.view.query_city = current.location_name.clone();
                self.view.current = Some(current);
                self.succeed();
            }
            Err(err) => {
                self.view.current = None;
                self.fail(LookupError::from_location_fetch(&err));
            }
        }
    }

    pub(crate) fn handle_search_completed(&mut self, outcome: SearchOutcome) {
        self.finish_cycle();
        match outcome {
            Ok((current, samples)) => {
                let forecast = reduce_daily(&samples);
                tracing::info!(
                    location = %current.location_name,
                    days = forecast.len(),
                    "search completed"
                );
                self.view.current = Some(current);
                self.view.forecast = forecast;
                self.succeed();
            }
            Err(err) => {
                self.view.current = None;
                self.view.forecast.clear();
                self.fail(LookupError::from_search(&err));
            }
        }
    }

    fn succeed(&mut self) {
        self.view.error_message = None;
        if !self.view.is_loading {
            self.mode = AppMode::Ready;
        }
    }

    fn fail(&mut self, err: LookupError) {
        self.view.error_message = Some(err.to_string());
        if !self.view.is_loading {
            self.mode = AppMode::Error;
        }
    }
}

#[cfg(test)]
mod tests;
