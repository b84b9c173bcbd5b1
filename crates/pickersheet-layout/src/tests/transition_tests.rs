use super::*;
use crate::engine::LayoutMode;
use pickersheet_ui_graphics::{Rect, Size};

const VIEWPORT: Rect = Rect::new(0.0, 0.0, 400.0, 100.0);

fn laid_out(widths: &[f32]) -> PreviewLayoutEngine {
    let mut engine = PreviewLayoutEngine::default();
    relayout(&mut engine, widths);
    engine
}

fn relayout(engine: &mut PreviewLayoutEngine, widths: &[f32]) {
    engine
        .relayout(
            widths.len() as isize,
            |index| Size::new(widths[index], 100.0),
            VIEWPORT,
            10.0,
            LayoutMode::Normal,
        )
        .expect("relayout");
}

#[test]
fn dropping_the_batch_clears_marks() {
    let mut engine = laid_out(&[50.0, 50.0]);
    {
        let mut batch = engine.begin_transition();
        batch.insert([2]).remove([0]);
        relayout(&mut batch, &[50.0, 50.0, 50.0]);
        assert!(batch.state().inserting_indices().contains(&2));
        assert!(batch.state().removal_indices().contains(&0));
    }
    assert!(!engine.has_transition_marks());
}

#[test]
fn committing_the_batch_clears_marks() {
    let mut engine = laid_out(&[50.0]);
    let mut batch = engine.begin_transition();
    batch.insert([1]);
    relayout(&mut batch, &[50.0, 50.0]);
    let entry = batch.initial_attributes_for_appearing(1).expect("entry");
    assert_eq!(entry.alpha, 0.0);
    batch.commit();

    assert!(!engine.has_transition_marks());
}

#[test]
fn stale_marks_do_not_leak_into_a_new_batch() {
    let mut engine = laid_out(&[50.0, 50.0]);
    engine.mark_inserting([1]);

    let batch = engine.begin_transition();
    assert!(!batch.has_transition_marks());
}

#[test]
fn enlarge_transition_animates_every_resized_tile() {
    let mut engine = laid_out(&[50.0, 50.0, 50.0]);
    relayout(&mut engine, &[80.0, 50.0, 50.0]);

    let transitions = engine.transitions();
    let indices: Vec<usize> = transitions.iter().map(|t| t.index).collect();
    // tile 0 grows, tiles 1 and 2 shift right
    assert_eq!(indices, vec![0, 1, 2]);
    assert_eq!(transitions[1].from.frame.x, 60.0);
    assert_eq!(transitions[1].to.frame.x, 90.0);
}

#[test]
fn identical_passes_produce_no_transitions() {
    let mut engine = laid_out(&[50.0, 70.0]);
    relayout(&mut engine, &[50.0, 70.0]);
    assert!(engine.transitions().is_empty());
}

#[test]
fn inserted_tile_transition_starts_from_entry_snapshot() {
    let mut engine = laid_out(&[50.0]);
    let mut batch = engine.begin_transition();
    batch.insert([1]);
    relayout(&mut batch, &[50.0, 40.0]);

    let transitions = batch.transitions();
    assert_eq!(transitions.len(), 1);
    let inserted = transitions[0];
    assert_eq!(inserted.index, 1);
    assert_eq!(inserted.from.frame, Rect::new(60.0, -100.0, 40.0, 100.0));
    assert_eq!(inserted.to.frame, Rect::new(60.0, 0.0, 40.0, 100.0));
    batch.commit();
}

#[test]
fn removal_transitions_are_sorted_and_exit_upwards() {
    let mut engine = laid_out(&[50.0, 50.0, 50.0]);
    let mut batch = engine.begin_transition();
    batch.remove([2, 0]);
    relayout(&mut batch, &[50.0]);

    let exits = batch.disappearing_transitions();
    let indices: Vec<usize> = exits.iter().map(|t| t.index).collect();
    assert_eq!(indices, vec![0, 2]);
    assert_eq!(exits[1].from.frame, Rect::new(120.0, 0.0, 50.0, 100.0));
    assert_eq!(exits[1].to.frame, Rect::new(120.0, -100.0, 50.0, 100.0));
    assert_eq!(exits[1].to.alpha, 0.0);
}

#[test]
fn sample_interpolates_between_snapshots() {
    let mut from = LayoutAttributes::new(3, Rect::new(0.0, -100.0, 40.0, 100.0));
    from.alpha = 0.0;
    from.scale = 0.1;
    let to = LayoutAttributes::new(3, Rect::new(0.0, 0.0, 40.0, 100.0));
    let transition = AttributeTransition::between(from, to);

    assert_eq!(transition.sample(0.0, Easing::Linear), from);
    assert_eq!(transition.sample(1.0, Easing::Linear), to);
    assert_eq!(transition.sample(2.0, Easing::Linear), to);

    let halfway = transition.sample(0.5, Easing::Linear);
    assert_eq!(halfway.frame.y, -50.0);
    assert_eq!(halfway.alpha, 0.5);
    assert!((halfway.scale - 0.55).abs() < 1e-6);
}
