use std::collections::hash_map::DefaultHasher;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use rand::Rng;

use crate::error::{BoggleError, Result};

/// An n-sided die whose faces are decorated with strings.
///
/// Faces are numbered `1..=n`. Two dice are equal when they show the same
/// label and carry the same multiset of labels, regardless of which face
/// number each label sits on.
#[derive(Debug, Clone)]
pub struct Die {
    faces: Vec<String>,
    /// 1-based face number currently on top
    current: usize,
}

impl Die {
    pub fn new<I, S>(faces: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let faces: Vec<String> = faces.into_iter().map(Into::into).collect();
        if faces.is_empty() {
            return Err(BoggleError::NoFaces);
        }
        Ok(Self { faces, current: 1 })
    }

    pub(crate) fn six_sided(faces: &[&str; 6]) -> Self {
        Self {
            faces: faces.iter().map(|face| face.to_string()).collect(),
            current: 1,
        }
    }

    /// Roll to a uniformly chosen face and return its label
    pub fn roll(&mut self, rng: &mut impl Rng) -> &str {
        self.current = rng.random_range(1..=self.faces.len());
        self.value()
    }

    /// Label of the face currently on top
    pub fn value(&self) -> &str {
        &self.faces[self.current - 1]
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Turn the die so that face number `face` is on top
    pub fn set_face(&mut self, face: usize) -> Result<()> {
        if face == 0 || face > self.faces.len() {
            return Err(BoggleError::FaceOutOfRange {
                face,
                faces: self.faces.len(),
            });
        }
        self.current = face;
        Ok(())
    }

    /// Fresh map of face number to label; changes to it do not touch the die
    pub fn face_map(&self) -> BTreeMap<usize, String> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, label)| (i + 1, label.clone()))
            .collect()
    }

    /// Sum of the hashes of every face label
    pub fn hash_code(&self) -> u64 {
        self.faces.iter().fold(0u64, |sum, label| {
            let mut hasher = DefaultHasher::new();
            label.hash(&mut hasher);
            sum.wrapping_add(hasher.finish())
        })
    }

    fn sorted_faces(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = self.faces.iter().map(String::as_str).collect();
        labels.sort_unstable();
        labels
    }
}

impl PartialEq for Die {
    fn eq(&self, other: &Self) -> bool {
        self.face_count() == other.face_count()
            && self.value() == other.value()
            && self.sorted_faces() == other.sorted_faces()
    }
}

impl Eq for Die {}

impl Hash for Die {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.faces.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn die(faces: &[&str]) -> Die {
        Die::new(faces.iter().copied()).unwrap()
    }

    #[test]
    fn test_empty_faces_rejected() {
        let err = Die::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, BoggleError::NoFaces));
    }

    #[test]
    fn test_initial_value_is_a_face() {
        let faces = ["A", "A", "E", "E", "G", "N"];
        let d = die(&faces);
        assert!(faces.contains(&d.value()));
        assert_eq!(d.face_count(), 6);
    }

    #[test]
    fn test_roll_reaches_every_face() {
        let faces = ["U", "H", "I", "M", "N", "QU"];
        let mut d = die(&faces);
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = HashSet::new();

        for _ in 0..600 {
            let label = d.roll(&mut rng).to_string();
            assert!(faces.contains(&label.as_str()));
            assert_eq!(label, d.value());
            seen.insert(label);
        }

        assert_eq!(seen.len(), faces.len());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = die(&["the", "for", "of", "to"]);
        original.set_face(3).unwrap();
        let mut copy = original.clone();
        assert_eq!(copy.value(), "of");

        copy.set_face(1).unwrap();
        assert_eq!(original.value(), "of");
        assert_eq!(copy.value(), "the");
    }

    #[test]
    fn test_equality_ignores_face_numbering() {
        // "the" is face 1 on one die and face 4 on the other
        let mut a = die(&["the", "for", "of", "to"]);
        let mut b = die(&["to", "for", "of", "the"]);
        a.set_face(1).unwrap();
        b.set_face(4).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.hash_code(), b.hash_code());

        b.set_face(1).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_respects_label_multiplicity() {
        let mut a = die(&["A", "A", "B"]);
        let mut b = die(&["A", "B", "B"]);
        a.set_face(1).unwrap();
        b.set_face(1).unwrap();
        assert_ne!(a, b);

        let c = die(&["A", "B"]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_set_face_out_of_range() {
        let mut d = die(&["A", "B"]);
        assert!(matches!(
            d.set_face(0),
            Err(BoggleError::FaceOutOfRange { face: 0, faces: 2 })
        ));
        assert!(d.set_face(3).is_err());
        assert!(d.set_face(2).is_ok());
    }

    #[test]
    fn test_face_map_is_a_copy() {
        let d = die(&["C", "M", "I"]);
        let mut map = d.face_map();
        assert_eq!(map.get(&1).map(String::as_str), Some("C"));
        assert_eq!(map.len(), 3);

        map.insert(1, "Z".to_string());
        assert_eq!(d.face_map().get(&1).map(String::as_str), Some("C"));
    }

    #[test]
    fn test_display_joins_faces_in_order() {
        let d = die(&["C", "M", "I", "QU", "U", "T"]);
        assert_eq!(d.to_string(), "C, M, I, QU, U, T");
    }
}
