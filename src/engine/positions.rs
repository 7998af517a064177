use crate::domain::SeatIndex;

/// Все места по кругу, начиная со `start` (включительно).
pub fn seats_from(start: SeatIndex, seats: usize) -> impl Iterator<Item = SeatIndex> {
    (0..seats).map(move |i| ((start as usize + i) % seats) as SeatIndex)
}
