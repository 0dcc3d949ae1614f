use std::collections::HashSet;

use chrono::{NaiveTime, Timelike};
use sea_orm::DatabaseConnection;

use crate::{
    model::turf::SlotDto,
    server::{
        data::booking::BookingRepository,
        error::Error,
        service::non_blank,
        util::time,
    },
};

/// First bookable hour of the day
pub const OPENING_HOUR: u32 = 9;
/// Hour at which the last slot ends
pub const CLOSING_HOUR: u32 = 23;

/// Builds the hourly slot ladder for a day, marking the hours in `booked` unavailable.
///
/// Bookings are matched on hour and minute, seconds are ignored.
pub fn slot_ladder(booked: &[NaiveTime]) -> Vec<SlotDto> {
    let taken: HashSet<(u32, u32)> = booked.iter().map(|t| (t.hour(), t.minute())).collect();

    (OPENING_HOUR..CLOSING_HOUR)
        .map(|hour| SlotDto {
            id: hour,
            time: format!("{:02}:00 - {:02}:00", hour, hour + 1),
            available: !taken.contains(&(hour, 0)),
            start_raw: format!("{:02}:00", hour),
        })
        .collect()
}

pub struct SlotService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SlotService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Slots of a turf on a date, an absent date yields no slots
    pub async fn list(&self, turf_id: i32, date: Option<&str>) -> Result<Vec<SlotDto>, Error> {
        let Some(date) = non_blank(date) else {
            return Ok(Vec::new());
        };
        let date = time::parse_date("date", date)?;

        let booked = BookingRepository::new(self.db)
            .confirmed_start_times(turf_id, date)
            .await?;

        Ok(slot_ladder(&booked))
    }
}
