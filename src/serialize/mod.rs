
use crate::definition::{Definition, PathPoint};

/// Serialize a canonical definition back to path data.
///
/// Numbers are written in their shortest form. The separator before a number is omitted
/// after a command letter and before a negative number.
/// A definition without cubic points is written without its cubic command.
///
/// # Example
/// ```
/// use pathmorph::prelude::*;
///
/// let definition: Definition = "M0 0l1-1h-2z".parse().unwrap();
/// assert_eq!(serialize(&definition), "M0 0C0 0 1-1 1-1 1-1-1-1-1-1-1-1 0 0 0 0z");
/// ```
pub fn serialize(definition: &Definition) -> String {
    let mut text = String::from("M");
    push_point(&mut text, definition.anchor());
    if !definition.is_empty() {
        text.push('C');
        definition
            .points()
            .iter()
            .for_each(|point| push_point(&mut text, point));
    }
    text.push('z');
    text
}

fn push_point(text: &mut String, point: &PathPoint) {
    push_number(text, point.x());
    push_number(text, point.y());
}

fn push_number(text: &mut String, value: f64) {
    // avoid writing `-0`
    let value = if value == 0. { 0. } else { value };
    let after_letter = text.chars().last().is_some_and(|c| c.is_ascii_alphabetic());
    if !after_letter && value >= 0. {
        text.push(' ');
    }
    text.push_str(&value.to_string());
}
