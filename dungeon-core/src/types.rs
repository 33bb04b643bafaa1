use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul},
};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, factor: i32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    // The unit offset for one step in this direction. `Up` points towards
    // lower rows since the grid origin sits at the top-left corner.
    pub fn delta(&self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Right => write!(f, "right"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Material {
    #[default]
    Rock,
    Carved,
}

// Rock cells never carry a region id, so the unassigned state is part of
// the type instead of a magic number callers have to know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Region {
    #[default]
    Unassigned,
    Id(u32),
}

impl Region {
    pub fn is_assigned(&self) -> bool {
        matches!(self, Region::Id(_))
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Region::Unassigned => write!(f, "unassigned"),
            Region::Id(id) => write!(f, "region {}", id),
        }
    }
}

// An axis-aligned rectangle spanning `min` inclusive to `max` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(min: Point, max: Point) -> Self {
        Rect { min, max }
    }

    pub fn from_size(origin: Point, size: Point) -> Self {
        Rect {
            min: origin,
            max: origin + size,
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    pub fn contains(&self, point: Point) -> bool {
        self.min.x <= point.x && point.x < self.max.x && self.min.y <= point.y && point.y < self.max.y
    }

    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.min.x <= other.min.x
            && other.max.x <= self.max.x
            && self.min.y <= other.min.y
            && other.max.y <= self.max.y
    }

    // Shared edges do not count as an overlap, only shared interior cells do.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    pub fn points(&self) -> Vec<Point> {
        let mut points = Vec::new();

        for y in self.min.y..self.max.y {
            for x in self.min.x..self.max.x {
                points.push(Point::new(x, y));
            }
        }

        points
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({},{}):[{}x{}]",
            self.min.x,
            self.min.y,
            self.width(),
            self.height()
        )
    }
}

// A placed room together with the region id its floor was carved under.
// Joining may later relabel the floor cells on the grid itself; the id
// recorded here is the one the room started with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Room {
    pub rect: Rect,
    pub region: Region,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorSide {
    pub direction: Direction,
    pub region: Region,
}

// A rock cell separating two carved cells of different regions along one
// axis. One side looks at the cell ahead of `pos`, the other at the cell
// behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connector {
    pub pos: Point,
    pub sides: [ConnectorSide; 2],
}

impl Display for Connector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {} / {} {}",
            self.pos,
            self.sides[0].direction,
            self.sides[0].region,
            self.sides[1].direction,
            self.sides[1].region
        )
    }
}

pub(crate) type RegionSet = tinyset::SetUsize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: Point,
    cells: Vec<Material>,
    regions: Vec<Region>,
    region_count: u32,
}

impl Grid {
    pub fn new(size: Point) -> Self {
        if size.x <= 0 || size.y <= 0 {
            panic!("Cannot create a grid with dimensions [{}x{}]", size.x, size.y);
        }

        let cell_count = (size.x * size.y) as usize;

        Grid {
            size,
            cells: vec![Material::Rock; cell_count],
            regions: vec![Region::Unassigned; cell_count],
            region_count: 0,
        }
    }

    pub fn size(&self) -> Point {
        self.size
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(Point::ZERO, self.size)
    }

    fn index_of(&self, point: Point) -> usize {
        if !self.bounds().contains(point) {
            panic!(
                "Point {} is outside the grid bounds [{}x{}]",
                point, self.size.x, self.size.y
            );
        }

        (point.y * self.size.x + point.x) as usize
    }

    pub fn at(&self, point: Point) -> Material {
        self.cells[self.index_of(point)]
    }

    pub fn region_at(&self, point: Point) -> Region {
        self.regions[self.index_of(point)]
    }

    pub fn set_material(&mut self, point: Point, material: Material) {
        let index = self.index_of(point);
        self.cells[index] = material;
    }

    pub fn set_region(&mut self, point: Point, region: Region) {
        let index = self.index_of(point);
        self.regions[index] = region;
    }

    // Allocates the next region id. Ids are dense, so the full set of ids
    // ever handed out is always `1..=region_count`.
    pub fn new_region(&mut self) -> Region {
        self.region_count += 1;
        Region::Id(self.region_count)
    }

    pub fn region_count(&self) -> u32 {
        self.region_count
    }

    pub fn regions(&self) -> Vec<Region> {
        (1..=self.region_count).map(Region::Id).collect()
    }
}

// The finished layout: the carved grid plus the artifacts each pipeline
// step produced along the way. `connectors` holds every candidate found
// before joining, `doors` only the cells that were actually carved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dungeon {
    pub grid: Grid,
    pub rooms: Vec<Room>,
    pub connectors: Vec<Connector>,
    pub doors: Vec<Point>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_point_add_and_scale() {
        let point = Point::new(3, -2);

        assert_eq!(point + Point::new(1, 5), Point::new(4, 3));
        assert_eq!(point * 2, Point::new(6, -4));
        assert_eq!(point * -1, Point::new(-3, 2));
        assert_eq!(Point::ZERO + point, point);
    }

    #[test]
    fn test_direction_reverse_undoes_a_step() {
        for direction in [
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
        ] {
            let there = direction.delta();
            let back = direction.reverse().delta();

            assert_eq!(there + back, Point::ZERO);
            assert_eq!(direction.reverse().reverse(), direction);
        }
    }

    #[test]
    fn test_rect_contains_its_cells_but_not_its_max() {
        let rect = Rect::new(Point::new(1, 1), Point::new(4, 3));

        assert!(rect.contains(Point::new(1, 1)));
        assert!(rect.contains(Point::new(3, 2)));
        assert!(!rect.contains(Point::new(4, 1)));
        assert!(!rect.contains(Point::new(1, 3)));
        assert!(!rect.contains(Point::new(0, 1)));

        assert_eq!(rect.width(), 3);
        assert_eq!(rect.height(), 2);
    }

    #[test]
    fn test_rects_sharing_an_edge_do_not_overlap() {
        let rect = Rect::new(Point::new(1, 1), Point::new(4, 4));
        let touching = Rect::new(Point::new(4, 1), Point::new(6, 4));
        let crossing = Rect::new(Point::new(3, 3), Point::new(6, 6));

        assert!(!rect.overlaps(&touching));
        assert!(!touching.overlaps(&rect));
        assert!(rect.overlaps(&crossing));
        assert!(crossing.overlaps(&rect));
        assert!(rect.overlaps(&rect));
    }

    #[test]
    fn test_rect_containment_is_inclusive_of_edges() {
        let outer = Rect::new(Point::ZERO, Point::new(9, 9));
        let inner = Rect::new(Point::new(1, 1), Point::new(9, 9));
        let spilling = Rect::new(Point::new(5, 5), Point::new(10, 8));

        assert!(outer.contains_rect(&inner));
        assert!(outer.contains_rect(&outer));
        assert!(!outer.contains_rect(&spilling));
        assert!(!inner.contains_rect(&outer));
    }

    #[test]
    fn test_rect_points_cover_the_area_row_major() {
        let rect = Rect::from_size(Point::new(2, 1), Point::new(2, 2));
        let points = rect.points();

        let expected = vec![
            Point::new(2, 1),
            Point::new(3, 1),
            Point::new(2, 2),
            Point::new(3, 2),
        ];
        assert_eq!(points, expected);
    }

    #[test]
    fn test_new_grid_starts_as_unassigned_rock() {
        let grid = Grid::new(Point::new(4, 3));

        assert_eq!(grid.size(), Point::new(4, 3));
        assert_eq!(grid.bounds(), Rect::new(Point::ZERO, Point::new(4, 3)));
        assert_eq!(grid.region_count(), 0);
        assert!(grid.regions().is_empty());

        for point in grid.bounds().points() {
            assert_eq!(grid.at(point), Material::Rock);
            assert_eq!(grid.region_at(point), Region::Unassigned);
            assert!(!grid.region_at(point).is_assigned());
        }
    }

    #[test]
    fn test_grid_writes_only_touch_the_target_cell() {
        let mut grid = Grid::new(Point::new(3, 3));
        let target = Point::new(1, 1);
        let region = grid.new_region();

        grid.set_material(target, Material::Carved);
        grid.set_region(target, region);

        for point in grid.bounds().points() {
            if point == target {
                assert_eq!(grid.at(point), Material::Carved);
                assert_eq!(grid.region_at(point), region);
            } else {
                assert_eq!(grid.at(point), Material::Rock);
                assert_eq!(grid.region_at(point), Region::Unassigned);
            }
        }
    }

    #[test]
    fn test_region_ids_are_dense_and_ordered() {
        let mut grid = Grid::new(Point::new(2, 2));

        assert_eq!(grid.new_region(), Region::Id(1));
        assert_eq!(grid.new_region(), Region::Id(2));
        assert_eq!(grid.new_region(), Region::Id(3));

        assert_eq!(grid.region_count(), 3);
        let expected = vec![Region::Id(1), Region::Id(2), Region::Id(3)];
        assert_eq!(grid.regions(), expected);
        // Enumerating must not consume the counter.
        assert_eq!(grid.regions(), expected);
    }

    #[test]
    #[should_panic(expected = "outside the grid bounds")]
    fn test_reading_outside_the_grid_panics() {
        let grid = Grid::new(Point::new(3, 3));

        grid.at(Point::new(3, 0));
    }

    #[test]
    #[should_panic(expected = "outside the grid bounds")]
    fn test_writing_outside_the_grid_panics() {
        let mut grid = Grid::new(Point::new(3, 3));

        grid.set_region(Point::new(0, -1), Region::Id(1));
    }

    #[test]
    #[should_panic(expected = "Cannot create a grid")]
    fn test_grid_rejects_empty_dimensions() {
        let _ = Grid::new(Point::new(0, 5));
    }
}
