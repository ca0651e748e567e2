use crate::BOARD_SIZE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GomokuCoord {
    pub x: i32,
    pub y: i32,
}

impl GomokuCoord {
    pub fn new(x: i32, y: i32) -> Self {
        GomokuCoord { x, y }
    }

    pub fn iter_board() -> impl Iterator<Item = GomokuCoord> {
        (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| GomokuCoord::new(x as i32, y as i32)))
    }

    pub fn is_valid(&self) -> bool {
        self.x >= 0
            && self.y >= 0
            && (self.x as usize) < BOARD_SIZE
            && (self.y as usize) < BOARD_SIZE
    }

    pub fn try_get<'a, T>(&self, cells: &'a [T]) -> Option<&'a T> {
        if self.is_valid() {
            let index = (self.y as usize) * BOARD_SIZE + (self.x as usize);
            cells.get(index)
        } else {
            None
        }
    }

    pub fn try_get_mut<'a, T>(&self, cells: &'a mut [T]) -> Option<&'a mut T> {
        if self.is_valid() {
            let index = (self.y as usize) * BOARD_SIZE + (self.x as usize);
            cells.get_mut(index)
        } else {
            None
        }
    }
}
