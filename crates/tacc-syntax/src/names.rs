use std::fmt;

/// A jump target, `L<N>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fresh temporaries (`t<N>`) and labels (`L<N>`) for one compilation pass.
///
/// The two counters are independent, start at zero and only ever grow,
/// so no name is handed out twice within a pass.
#[derive(Debug, Default)]
pub struct Names {
    temps: usize,
    labels: usize,
}

impl Names {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn temp(&mut self) -> String {
        let name = format!("t{}", self.temps);
        self.temps += 1;
        name
    }

    pub fn label(&mut self) -> Label {
        let label = Label(format!("L{}", self.labels));
        self.labels += 1;
        label
    }

    /// Number of temporaries minted so far.
    pub fn temps(&self) -> usize {
        self.temps
    }

    /// Number of labels minted so far.
    pub fn labels(&self) -> usize {
        self.labels
    }
}
