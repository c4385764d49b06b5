//! Weather state and ticking, and the controller trait given to the logic that needs
//! to change the weather.

use tracing::debug;

use crate::util::JavaRandom;

use super::{World, Weather, Event};


/// Capability of changing the weather of a world. This is implemented by the world
/// itself but also by the bare [`WeatherState`], so that effects changing the weather
/// can be run against any of them.
pub trait WeatherController {

    /// Set the number of ticks before the rain flag toggles.
    fn set_rain_time(&mut self, time: u32);

    /// Set the number of ticks before the thunder flag toggles.
    fn set_thunder_time(&mut self, time: u32);

    /// Set the rain flag.
    fn set_raining(&mut self, raining: bool);

    /// Set the thunder flag, thunder is only visible while it's also raining.
    fn set_thundering(&mut self, thundering: bool);

}


/// Rain and thunder flags, with the number of ticks before each of them toggles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeatherState {
    pub raining: bool,
    pub thundering: bool,
    pub rain_time: u32,
    pub thunder_time: u32,
}

impl WeatherState {

    /// Get the weather derived from both flags.
    pub fn weather(&self) -> Weather {
        match (self.raining, self.thundering) {
            (false, _) => Weather::Clear,
            (true, false) => Weather::Rain,
            (true, true) => Weather::Thunder,
        }
    }

    /// Tick both timers, when a timer is already at zero a new duration is drawn for
    /// its flag's current state, when a timer reaches zero its flag toggles.
    pub fn tick(&mut self, rand: &mut JavaRandom) {

        if self.thunder_time == 0 {
            self.thunder_time = if self.thundering {
                3600 + rand.next_int_bounded(12000) as u32
            } else {
                12000 + rand.next_int_bounded(168000) as u32
            };
        } else {
            self.thunder_time -= 1;
            if self.thunder_time == 0 {
                self.thundering = !self.thundering;
            }
        }

        if self.rain_time == 0 {
            self.rain_time = if self.raining {
                12000 + rand.next_int_bounded(12000) as u32
            } else {
                12000 + rand.next_int_bounded(168000) as u32
            };
        } else {
            self.rain_time -= 1;
            if self.rain_time == 0 {
                self.raining = !self.raining;
            }
        }

    }

}

impl WeatherController for WeatherState {

    fn set_rain_time(&mut self, time: u32) {
        self.rain_time = time;
    }

    fn set_thunder_time(&mut self, time: u32) {
        self.thunder_time = time;
    }

    fn set_raining(&mut self, raining: bool) {
        self.raining = raining;
    }

    fn set_thundering(&mut self, thundering: bool) {
        self.thundering = thundering;
    }

}

impl World {

    /// Apply a change to the weather state, pushing a weather event if the visible
    /// weather changed.
    fn update_weather(&mut self, func: impl FnOnce(&mut WeatherState, &mut JavaRandom)) {
        let prev = self.weather.weather();
        func(&mut self.weather, &mut self.rand);
        let new = self.weather.weather();
        if prev != new {
            debug!("weather changed from {prev:?} to {new:?}");
            self.push_event(Event::Weather { prev, new });
        }
    }

    /// Tick the weather timers.
    pub(super) fn tick_weather(&mut self) {
        self.update_weather(|state, rand| state.tick(rand));
    }

}

impl WeatherController for World {

    fn set_rain_time(&mut self, time: u32) {
        self.weather.set_rain_time(time);
    }

    fn set_thunder_time(&mut self, time: u32) {
        self.weather.set_thunder_time(time);
    }

    fn set_raining(&mut self, raining: bool) {
        self.update_weather(|state, _| state.set_raining(raining));
    }

    fn set_thundering(&mut self, thundering: bool) {
        self.update_weather(|state, _| state.set_thundering(thundering));
    }

}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn toggle_on_zero() {

        let mut rand = JavaRandom::new(0);
        let mut state = WeatherState { rain_time: 2, thunder_time: 1, ..Default::default() };

        state.tick(&mut rand);
        assert!(state.thundering);
        assert!(!state.raining);
        assert_eq!(state.rain_time, 1);

        state.tick(&mut rand);
        assert!(state.raining);
        assert_eq!(state.weather(), Weather::Thunder);
        // New thunder duration drawn for the thundering state.
        assert!((3600..15600).contains(&state.thunder_time));

    }

    #[test]
    fn world_events() {

        let mut world = World::new();
        world.swap_events(Some(Vec::new()));

        world.set_thundering(true);
        world.set_raining(true);
        world.set_raining(true);

        let events = world.swap_events(None).unwrap();
        assert_eq!(events, [Event::Weather { prev: Weather::Clear, new: Weather::Thunder }]);

    }

}
