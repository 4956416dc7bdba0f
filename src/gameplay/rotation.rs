use super::seat::Seat;
use crate::Error;
use crate::Position;

/// Circular turn order over the seats at the table.
///
/// The cursor remembers who went last; `current` is derived from it lazily,
/// so reading it never moves the rotation. Only `next` advances, by exactly
/// one seat per call.
#[derive(Debug, Clone, Default)]
pub struct Rotation {
    seats: Vec<Seat>,
    last: Option<Position>,
}

impl Rotation {
    pub fn add(&mut self, seat: Seat) {
        self.seats.push(seat);
    }
    pub fn len(&self) -> usize {
        self.seats.len()
    }
    pub fn is_empty(&self) -> bool {
        self.seats.is_empty()
    }
    /// The seat whose turn begins next, without advancing.
    pub fn current(&self) -> Result<Position, Error> {
        match self.len() {
            0 => Err(Error::EmptyQueue),
            n => Ok(self.last.map_or(0, |i| (i + 1) % n)),
        }
    }
    /// Advances the rotation and returns the seat whose turn now begins.
    pub fn next(&mut self) -> Result<Position, Error> {
        let current = self.current()?;
        self.last = Some(current);
        Ok(current)
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, pos: Position) -> Result<&Seat, Error> {
        self.seats.get(pos).ok_or(Error::UnknownSeat(pos))
    }
    pub fn seat_mut(&mut self, pos: Position) -> Result<&mut Seat, Error> {
        self.seats.get_mut(pos).ok_or(Error::UnknownSeat(pos))
    }
    pub fn position(&self, name: &str) -> Option<Position> {
        self.seats.iter().position(|s| s.name() == name)
    }
}
