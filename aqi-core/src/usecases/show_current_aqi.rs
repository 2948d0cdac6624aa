use super::prelude::*;

/// Locates the user, fetches the AQI for that position and shows it.
///
/// The display is only touched if every step succeeded.
pub async fn show_current_aqi<G, A, D>(geolocation: &G, aqi: &A, display: &D) -> Result<AqiReading>
where
    G: Geolocation,
    A: AqiGateway,
    D: AqiDisplay,
{
    let pos = geolocation.current_position().await?;
    log::debug!("Current position: lat={}, lng={}", pos.lat, pos.lng);
    let text = aqi.current_aqi(pos).await?;
    let reading = AqiReading::new(text);
    log::debug!("Current AQI: {} ({:?})", reading.text, reading.band());
    display.show_aqi(&reading);
    Ok(reading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::tests::*;
    use futures::executor::block_on;

    fn show(aqi: &str) -> AqiReading {
        let events = Events::default();
        let geo = MockGeolocation::at(40.0, -73.0, &events);
        let backend = MockBackend::with_aqi(aqi, &events);
        let display = MockDisplay::default();
        block_on(show_current_aqi(&geo, &backend, &display)).unwrap();
        display.shown.take().unwrap()
    }

    #[test]
    fn show_green_yellow_and_red() {
        let r = show("42");
        assert_eq!(r.text, "42");
        assert_eq!(r.band().color(), "hsl(141,53%,53%)");
        assert_eq!(show("150").band().color(), "hsl(48,100%,67%)");
        assert_eq!(show("301").band().color(), "hsl(348,100%,61%)");
    }

    #[test]
    fn show_non_numeric_text_in_green() {
        let r = show("no sensors nearby");
        assert_eq!(r.text, "no sensors nearby");
        assert_eq!(r.band(), AqiBand::Green);
    }

    #[test]
    fn query_the_aqi_at_the_current_position() {
        let events = Events::default();
        let geo = MockGeolocation::at(52.5, 13.4, &events);
        let backend = MockBackend::with_aqi("12", &events);
        let display = MockDisplay::default();
        block_on(show_current_aqi(&geo, &backend, &display)).unwrap();
        assert_eq!(*backend.aqi_queries.borrow(), vec![Coordinates::new(52.5, 13.4)]);
        assert_eq!(events.recorded(), vec!["position", "aqi"]);
    }

    #[test]
    fn keep_display_if_geolocation_fails() {
        let events = Events::default();
        let geo = MockGeolocation::denied(&events);
        let backend = MockBackend::with_aqi("42", &events);
        let display = MockDisplay::default();
        let res = block_on(show_current_aqi(&geo, &backend, &display));
        assert!(matches!(res, Err(Error::Geolocation(_))));
        assert!(display.shown.borrow().is_none());
        assert!(backend.aqi_queries.borrow().is_empty());
    }

    #[test]
    fn keep_display_if_fetching_fails() {
        let events = Events::default();
        let geo = MockGeolocation::at(40.0, -73.0, &events);
        let backend = MockBackend::offline(&events);
        let display = MockDisplay::default();
        let res = block_on(show_current_aqi(&geo, &backend, &display));
        assert!(matches!(res, Err(Error::Network(_))));
        assert!(display.shown.borrow().is_none());
    }
}
