use bezedit::{InputEvent, Point};
use once_cell::sync::Lazy;

/// Points scattered over the default 640x480 canvas
/// ```python
/// from random import random
/// for i in range(12):
///     print(f"({random()*640:.1f}, {random()*480:.1f}),")
/// ```
pub static POINTS: Lazy<Vec<Point>> = Lazy::new(|| {
    [
        (52.3, 411.8),
        (598.1, 37.6),
        (310.9, 250.2),
        (87.4, 12.5),
        (444.0, 399.3),
        (129.7, 301.0),
        (615.2, 222.4),
        (12.8, 98.1),
        (377.6, 470.0),
        (233.3, 64.9),
        (501.5, 155.7),
        (168.2, 183.4),
    ]
    .into_iter()
    .map(|(x, y)| Point::new(x, y))
    .collect()
});

pub static CURVES: Lazy<Curves> = Lazy::new(Curves::new);
#[allow(non_snake_case)]
pub struct Curves {
    pub LINEAR: Vec<Point>,
    pub CUBIC: Vec<Point>,
    pub HIGHER: Vec<Point>,
}
impl Curves {
    pub fn new() -> Curves {
        Curves {
            LINEAR: POINTS[..2].to_vec(),
            CUBIC: POINTS[..4].to_vec(),
            HIGHER: POINTS.to_vec(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Point]> {
        [&self.LINEAR[..], &self.CUBIC[..], &self.HIGHER[..]].into_iter()
    }
}

/// Add every sample point, then select, move and delete a few of them
pub static SESSION: Lazy<Vec<InputEvent>> = Lazy::new(|| {
    let mut events: Vec<InputEvent> = POINTS.iter().map(|&p| InputEvent::LeftClick(p)).collect();
    for (i, p) in POINTS.iter().enumerate().step_by(3) {
        events.push(InputEvent::RightClick(*p));
        if i % 2 == 0 {
            events.push(InputEvent::LeftClick(Point::new(p.y, p.x)));
        } else {
            events.push(InputEvent::DeleteKeyPressed);
        }
    }
    events
});
