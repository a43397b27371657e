use bayes_patrol::{SearchArea, SearchError};

#[test]
fn geometry_accessors() {
    let area = SearchArea::new((130, 265), (180, 315), 0.2).unwrap();
    assert_eq!(area.upper_left(), (130, 265));
    assert_eq!(area.lower_right(), (180, 315));
    assert_eq!(area.width(), 50);
    assert_eq!(area.height(), 50);
    assert_eq!(area.cell_count(), 2500);
    assert_eq!(area.probability, 0.2);
    assert_eq!(area.effectiveness, 0.0);
}

#[test]
fn corners_must_be_ordered() {
    // equal x extent
    assert_eq!(
        SearchArea::new((10, 0), (10, 20), 0.5).unwrap_err(),
        SearchError::InvalidGeometry
    );
    // reversed y extent
    assert_eq!(
        SearchArea::new((0, 30), (20, 10), 0.5).unwrap_err(),
        SearchError::InvalidGeometry
    );
    // fully reversed corners
    assert_eq!(
        SearchArea::new((20, 20), (0, 0), 0.5).unwrap_err(),
        SearchError::InvalidGeometry
    );
}

#[test]
fn probability_must_be_a_probability() {
    assert_eq!(
        SearchArea::new((0, 0), (10, 10), -0.1).unwrap_err(),
        SearchError::DegenerateProbability
    );
    assert_eq!(
        SearchArea::new((0, 0), (10, 10), 1.5).unwrap_err(),
        SearchError::DegenerateProbability
    );
}

#[test]
fn to_global_offsets_by_upper_left() {
    let area = SearchArea::new((80, 255), (130, 305), 0.5).unwrap();
    assert_eq!(area.to_global((0, 0)), (80, 255));
    assert_eq!(area.to_global((49, 49)), (129, 304));
}

#[test]
fn unit_area_is_valid() {
    let area = SearchArea::new((5, 5), (6, 6), 1.0).unwrap();
    assert_eq!(area.width(), 1);
    assert_eq!(area.height(), 1);
    assert_eq!(area.cell_count(), 1);
}
