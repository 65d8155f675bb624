use derive_new::new;
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit<T> {
    Delete { value: T },
    Insert { value: T },
    Equal { value: T },
}

impl<T> Edit<T> {
    pub fn value(&self) -> &T {
        match self {
            Edit::Delete { value } | Edit::Insert { value } | Edit::Equal { value } => value,
        }
    }

    pub fn is_equal(&self) -> bool {
        matches!(self, Edit::Equal { .. })
    }

    /// Whether the edit consumes a line of the old sequence.
    fn in_a(&self) -> bool {
        !matches!(self, Edit::Insert { .. })
    }

    /// Whether the edit consumes a line of the new sequence.
    fn in_b(&self) -> bool {
        !matches!(self, Edit::Delete { .. })
    }
}

impl<T> Edit<T>
where
    T: AsRef<str>,
{
    pub fn as_string(&self) -> String {
        let prefix = match self {
            Edit::Delete { .. } => '-',
            Edit::Insert { .. } => '+',
            Edit::Equal { .. } => ' ',
        };

        format!("{prefix}{}", self.value().as_ref())
    }
}

impl<T> Display for Edit<T>
where
    T: AsRef<str>,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

pub trait DiffAlgorithm<T> {
    type Trace;
    type EditPath;

    fn compute_shortest_edit(&self) -> Self::Trace;
    fn backtrack(&self) -> Self::EditPath;
    fn diff(&self) -> Vec<Edit<T>>;

    fn hunks(&self, context: usize) -> Vec<Hunk<T>>
    where
        T: Clone,
    {
        Hunk::build(&self.diff(), context)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<T> MyersDiff<'_, T> {
    // one spare slot past each end so that k = ±(d + 1) lookups stay in bounds
    fn offset(&self) -> isize {
        (self.a.len() + self.b.len()) as isize + 1
    }
}

impl<T: Eq + Clone> MyersDiff<'_, T> {
    /// Edit script of `a` and `b` as given, without trimming.
    fn edit_script(&self) -> Vec<Edit<T>> {
        if self.a.is_empty() || self.b.is_empty() {
            return self
                .a
                .iter()
                .map(|value| Edit::Delete {
                    value: value.clone(),
                })
                .chain(self.b.iter().map(|value| Edit::Insert {
                    value: value.clone(),
                }))
                .collect();
        }

        let mut diff = self
            .backtrack()
            .into_iter()
            .map(|(prev_x, prev_y, x, y)| {
                if x == prev_x {
                    Edit::Insert {
                        value: self.b[prev_y as usize].clone(),
                    }
                } else if y == prev_y {
                    Edit::Delete {
                        value: self.a[prev_x as usize].clone(),
                    }
                } else {
                    Edit::Equal {
                        value: self.a[prev_x as usize].clone(),
                    }
                }
            })
            .collect::<Vec<_>>();

        diff.reverse();
        diff
    }
}

impl<T: Eq + Clone> DiffAlgorithm<T> for MyersDiff<'_, T> {
    /// Row `d` holds `v[k]` for `k` in `-(d + 1)..=d + 1` as it was before
    /// step `d`.
    type Trace = Vec<Vec<isize>>;
    type EditPath = Vec<(isize, isize, isize, isize)>;

    fn compute_shortest_edit(&self) -> Self::Trace {
        let (n, m) = (self.a.len() as isize, self.b.len() as isize);
        let offset = self.offset();

        let mut v = vec![0; (2 * offset + 1) as usize];
        let mut trace = Vec::new();

        for d in 0..=(n + m) {
            trace.push(v[(offset - d - 1) as usize..=(offset + d + 1) as usize].to_vec());

            for k in (-d..=d).step_by(2) {
                let idx = (offset + k) as usize;

                let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                    // moving down from k+1, thus an insertion
                    v[idx + 1]
                } else {
                    // moving right from k-1, thus a deletion
                    v[idx - 1] + 1
                };

                let mut y = x - k;
                while x < n && y < m && self.a[x as usize] == self.b[y as usize] {
                    // snake
                    x += 1;
                    y += 1;
                }

                v[idx] = x;

                if x >= n && y >= m {
                    return trace;
                }
            }
        }

        trace
    }

    fn backtrack(&self) -> Self::EditPath {
        let (mut x, mut y) = (self.a.len() as isize, self.b.len() as isize);
        let mut edit_path = Vec::new();

        let trace = self.compute_shortest_edit();

        for (d, row) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let v = |k: isize| row[(k + d + 1) as usize];
            let k = x - y;

            let prev_k = if k == -d || (k != d && v(k - 1) < v(k + 1)) {
                k + 1
            } else {
                k - 1
            };

            let prev_x = v(prev_k);
            let prev_y = prev_x - prev_k;

            while x > prev_x && y > prev_y {
                edit_path.push((x - 1, y - 1, x, y));
                x -= 1;
                y -= 1;
            }

            if d > 0 {
                edit_path.push((prev_x, prev_y, x, y));
            }

            (x, y) = (prev_x, prev_y);
        }

        edit_path
    }

    /// Common leading and trailing lines are matched up front; only the
    /// differing middle goes through the search.
    fn diff(&self) -> Vec<Edit<T>> {
        let prefix = self
            .a
            .iter()
            .zip(self.b)
            .take_while(|(x, y)| x == y)
            .count();
        let suffix = self.a[prefix..]
            .iter()
            .rev()
            .zip(self.b[prefix..].iter().rev())
            .take_while(|(x, y)| x == y)
            .count();

        let middle = MyersDiff::new(
            &self.a[prefix..self.a.len() - suffix],
            &self.b[prefix..self.b.len() - suffix],
        );
        let equal = |value: &T| Edit::Equal {
            value: value.clone(),
        };

        self.a[..prefix]
            .iter()
            .map(equal)
            .chain(middle.edit_script())
            .chain(self.a[self.a.len() - suffix..].iter().map(equal))
            .collect()
    }
}

/// A contiguous run of edits, padded with unchanged context lines.
///
/// `a_offset`/`b_offset` count the lines of each side that precede the hunk,
/// which is what the `@@` header is derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    a_offset: usize,
    b_offset: usize,
    edits: Vec<Edit<T>>,
}

impl<T> Hunk<T> {
    pub fn a_size(&self) -> usize {
        self.edits.iter().filter(|edit| edit.in_a()).count()
    }

    pub fn b_size(&self) -> usize {
        self.edits.iter().filter(|edit| edit.in_b()).count()
    }

    /// First old line covered by the hunk, 1-based. An empty range points at
    /// the line right before it, as unified diff tooling expects.
    pub fn a_start(&self) -> usize {
        if self.a_size() == 0 {
            self.a_offset
        } else {
            self.a_offset + 1
        }
    }

    pub fn b_start(&self) -> usize {
        if self.b_size() == 0 {
            self.b_offset
        } else {
            self.b_offset + 1
        }
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.a_start(),
            self.a_size(),
            self.b_start(),
            self.b_size()
        )
    }
}

impl<T: Clone> Hunk<T> {
    /// Groups an edit script into hunks. Changes separated by at most
    /// `2 * context` unchanged lines end up in the same hunk.
    pub fn build(edits: &[Edit<T>], context: usize) -> Vec<Self> {
        let mut hunks = Vec::new();
        let (mut a_offset, mut b_offset) = (0, 0);
        let mut counted = 0;
        let mut cursor = 0;

        while let Some(first) = edits[cursor..]
            .iter()
            .position(|edit| !edit.is_equal())
            .map(|pos| pos + cursor)
        {
            let start = first.saturating_sub(context);

            let mut last = first;
            for (idx, edit) in edits.iter().enumerate().skip(first + 1) {
                if !edit.is_equal() {
                    last = idx;
                } else if idx - last > 2 * context {
                    break;
                }
            }
            let end = (last + context + 1).min(edits.len());

            for edit in &edits[counted..start] {
                a_offset += usize::from(edit.in_a());
                b_offset += usize::from(edit.in_b());
            }
            counted = start;

            hunks.push(Hunk {
                a_offset,
                b_offset,
                edits: edits[start..end].to_vec(),
            });

            cursor = end;
        }

        hunks
    }
}
