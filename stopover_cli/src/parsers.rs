use stopover::Stop;

/// Parses `LAT,LNG` or `LAT,LNG,LABEL`. The label may contain commas.
pub fn parse_stop(input: &str) -> Result<Stop, String> {
    let mut parts = input.splitn(3, ',');

    let latitude = parse_coordinate(parts.next(), "latitude", 90.0)?;
    let longitude = parse_coordinate(parts.next(), "longitude", 180.0)?;

    let stop = Stop::new(latitude, longitude);

    match parts.next().map(str::trim) {
        Some(label) if !label.is_empty() => Ok(stop.with_label(label)),
        _ => Ok(stop),
    }
}

fn parse_coordinate(part: Option<&str>, name: &str, limit: f64) -> Result<f64, String> {
    let part = part
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .ok_or_else(|| format!("Missing {name}, expected LAT,LNG[,LABEL]"))?;

    let value = part
        .parse::<f64>()
        .map_err(|_| format!("Invalid {name}: {part}"))?;

    if !value.is_finite() || value.abs() > limit {
        return Err(format!("{name} out of range: {value}"));
    }

    Ok(value)
}
