use std::collections::HashMap;

#[derive(Debug)]
struct Node<V> {
    children: HashMap<char, Node<V>>,
    value: Option<V>,
}

impl<V> Node<V> {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            value: None,
        }
    }
}

/// Char-keyed trie used for both directions of the glyph table.
///
/// Values are never overwritten: the first insert for a key wins, so equal
/// keys resolve in definition order rather than map iteration order.
#[derive(Debug)]
pub(crate) struct CharTrie<V> {
    root: Node<V>,
    max_depth: usize,
}

impl<V> CharTrie<V> {
    pub fn new() -> Self {
        Self {
            root: Node::new(),
            max_depth: 0,
        }
    }

    /// Insert `value` under `key`. Returns `false` (keeping the earlier
    /// value) if the key is already occupied.
    pub fn insert(&mut self, key: &str, value: V) -> bool {
        let slot = self.slot_mut(key);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        true
    }

    /// Mutable access to the value slot of `key`, creating the path if needed.
    pub fn slot_mut(&mut self, key: &str) -> &mut Option<V> {
        let mut node = &mut self.root;
        let mut depth = 0;
        for c in key.chars() {
            node = node.children.entry(c).or_insert_with(Node::new);
            depth += 1;
        }
        self.max_depth = self.max_depth.max(depth);
        &mut node.value
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let mut node = &self.root;
        for c in key.chars() {
            node = node.children.get(&c)?;
        }
        node.value.as_ref()
    }

    /// Longest key that is a prefix of `input`, looking at most `max_len`
    /// chars ahead. Equivalent to trying windows from `max_len` down to 1 and
    /// taking the first hit, but walks the input once.
    pub fn longest_match(&self, input: &[char], max_len: usize) -> Option<(usize, &V)> {
        let mut node = &self.root;
        let mut best = None;
        for (i, c) in input.iter().take(max_len).enumerate() {
            match node.children.get(c) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(value) = &node.value {
                best = Some((i + 1, value));
            }
        }
        best
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn sample() -> CharTrie<&'static str> {
        let mut trie = CharTrie::new();
        trie.insert("c", "C");
        trie.insert("ca", "CA");
        trie.insert("nga", "NGA");
        trie
    }

    #[test]
    fn test_get_exact() {
        let trie = sample();
        assert_eq!(trie.get("ca"), Some(&"CA"));
        assert_eq!(trie.get("ng"), None);
        assert_eq!(trie.get("x"), None);
    }

    #[test]
    fn test_longest_prefers_longer_key() {
        let trie = sample();
        assert_eq!(trie.longest_match(&chars("cat"), 4), Some((2, &"CA")));
        assert_eq!(trie.longest_match(&chars("co"), 4), Some((1, &"C")));
    }

    #[test]
    fn test_longest_falls_back_past_dead_prefix() {
        // "ng" is only a prefix; the walk must not report it as a match.
        let trie = sample();
        assert_eq!(trie.longest_match(&chars("ngo"), 4), None);
        assert_eq!(trie.longest_match(&chars("ngas"), 4), Some((3, &"NGA")));
    }

    #[test]
    fn test_window_bound() {
        let trie = sample();
        assert_eq!(trie.longest_match(&chars("nga"), 2), None);
        assert_eq!(trie.longest_match(&chars("ca"), 1), Some((1, &"C")));
    }

    #[test]
    fn test_first_insert_wins() {
        let mut trie = CharTrie::new();
        assert!(trie.insert("ka", 1));
        assert!(!trie.insert("ka", 2));
        assert_eq!(trie.get("ka"), Some(&1));
        assert_eq!(trie.longest_match(&chars("ka"), 2), Some((2, &1)));
    }

    #[test]
    fn test_max_depth() {
        let trie = sample();
        assert_eq!(trie.max_depth(), 3);
        assert_eq!(CharTrie::<u8>::new().max_depth(), 0);
    }

    #[test]
    fn test_empty_input() {
        let trie = sample();
        assert_eq!(trie.longest_match(&[], 4), None);
    }
}
