use approx::assert_relative_eq;
use dplab_experiments::{epsilon::EpsilonError, neighbour};
use dplab_notebook::{create_neighbour, get_epsilons, hline, write_hline};

#[test]
fn neighbour_length_differs_by_one() {
    let dataset = vec![2.0, 4.0, 4.0, 8.0, 16.0];

    for _ in 0..100 {
        let result = create_neighbour(&dataset, false).unwrap();
        assert!(result.len() == 4 || result.len() == 6, "{result:?}");
    }
    assert_eq!(dataset, vec![2.0, 4.0, 4.0, 8.0, 16.0]);
}

#[test]
fn verbose_does_not_change_the_contract() {
    let dataset = [7, 7, 7];

    for _ in 0..20 {
        let mut result = create_neighbour(&dataset, true).unwrap();
        result.sort_unstable();
        assert!(result == [7, 7] || result == [7, 7, 7, 7], "{result:?}");
    }
}

#[test]
fn single_record_neighbours_are_empty_or_doubled() {
    for _ in 0..50 {
        let result = create_neighbour(&[3_u32], false).unwrap();
        assert!(result.is_empty() || result == [3, 3], "{result:?}");
    }
}

#[test]
fn empty_dataset_is_rejected() {
    let dataset: Vec<i64> = Vec::new();

    assert_eq!(
        create_neighbour(&dataset, true),
        Err(neighbour::Error::EmptyDataset)
    );
}

#[test]
fn epsilons_follow_the_exclusive_upper_bound() {
    assert_eq!(get_epsilons(1.0, 0.25).unwrap(), vec![0.25, 0.5, 0.75]);
    assert!(get_epsilons(0.5, 0.5).unwrap().is_empty());

    let tenths = get_epsilons(0.5, 0.1).unwrap();
    assert_eq!(tenths.len(), 4);
    assert_relative_eq!(tenths[3], 0.4, epsilon = 1e-12);
}

#[test]
fn epsilons_reject_invalid_parameters() {
    assert_eq!(
        get_epsilons(1.0, 0.0),
        Err(EpsilonError::Step { value: 0.0 })
    );
    assert_eq!(
        get_epsilons(-0.5, 0.1),
        Err(EpsilonError::MaxEpsilon { value: -0.5 })
    );
}

#[test]
fn hline_is_box_drawing_characters() {
    let mut buffer: Vec<u8> = Vec::new();
    write_hline(&mut buffer, 5).unwrap();

    assert_eq!(buffer, format!("{}\n", hline(5)).into_bytes());
    assert_eq!(hline(5), "\u{2500}".repeat(5));
}
