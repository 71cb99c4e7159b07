//! Generic cursor-based parser scaffolding.
//!
//! A concrete parser owns a [`ParserState`] and implements the four required
//! methods of [`ParserBase`]; cursor movement, lookahead and error
//! collection come for free.

/// Node array, cursor and collected error messages of a running parse.
#[derive(Debug, Clone)]
pub struct ParserState<N> {
    nodes: Vec<N>,
    position: usize,
    errors: Vec<String>,
}

impl<N> ParserState<N> {
    pub fn new(nodes: Vec<N>) -> Self {
        Self {
            nodes,
            position: 0,
            errors: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn take_errors(&mut self) -> Vec<String> {
        std::mem::take(&mut self.errors)
    }
}

impl<N> Default for ParserState<N> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

pub trait ParserBase {
    type Input: ?Sized;
    type Node;
    type Category: Copy;
    type Output;

    fn state(&self) -> &ParserState<Self::Node>;
    fn state_mut(&mut self) -> &mut ParserState<Self::Node>;

    /// Whether the node at the cursor belongs to `category`.
    fn check(&self, category: Self::Category) -> bool;

    /// Decorate `msg` with whatever locates the failure for a reader.
    fn make_error_msg(&self, msg: &str) -> String;

    fn parse(&mut self, input: &Self::Input) -> Self::Output;

    fn reset(&mut self) {
        *self.state_mut() = ParserState::default();
    }

    fn is_at_end(&self) -> bool {
        let state = self.state();
        state.position >= state.nodes.len()
    }

    /// The node `offset` positions away from the cursor, if there is one.
    fn look_around(&self, offset: isize) -> Option<&Self::Node> {
        let state = self.state();
        let pos = state.position.checked_add_signed(offset)?;
        state.nodes.get(pos)
    }

    /// Move past the current node and return it.
    fn advance(&mut self) -> Option<&Self::Node> {
        let pos = self.state().position;
        self.state_mut().position += 1;
        self.state().nodes.get(pos)
    }

    /// Advance past a node of `category`, or record `msg` and stay put.
    fn consume(&mut self, category: Self::Category, msg: &str) -> Option<&Self::Node> {
        if self.check(category) {
            return self.advance();
        }
        let msg = self.make_error_msg(msg);
        self.add_error(msg);
        None
    }

    /// Advance if the current node belongs to any of `categories`.
    fn match_any(&mut self, categories: &[Self::Category]) -> bool {
        for category in categories {
            if self.check(*category) {
                self.advance();
                return true;
            }
        }
        false
    }

    fn previous(&self) -> Option<&Self::Node> {
        self.look_around(-1)
    }

    fn current(&self) -> Option<&Self::Node> {
        self.look_around(0)
    }

    fn peek(&self) -> Option<&Self::Node> {
        self.look_around(1)
    }

    fn peek_next(&self) -> Option<&Self::Node> {
        self.look_around(2)
    }

    fn add_error(&mut self, msg: String) {
        self.state_mut().errors.push(msg);
    }

    fn had_error(&self) -> bool {
        !self.state().errors.is_empty()
    }
}
