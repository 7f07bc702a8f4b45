//! The mad libs demo. The user supplies a word per category, the words are stored in a
//! [`Tree`] keyed by category and then substituted into a fixed story.

use std::io::{self, BufRead, Write};

use tracing::info;

use crate::console::Console;
use crate::tree::{Order, Tree};

/// The categories asked for, in prompt order.
pub const CATEGORIES: [&str; 3] = ["noun", "verb", "adverb"];

/// The story. Each category appears once as `[category]`.
pub const STORY: &str = "My cat,[noun], decided my laptop was a new scratching post.  The resulting chaos involved spilled coffee, a startled scream, a very guilty-looking feline  , and I [verb].  My deadline?  Completely and [adverb] missed, of course!!!!.";

/// Replaces the first `[category]` in `template` with that category's word from `words`, for
/// each of `categories` in turn. A category with no word in the tree is replaced with nothing and
/// a category with no placeholder is skipped.
///
/// # Examples
///
/// ```
/// use treeheap::madlibs::fill;
/// use treeheap::tree::Tree;
///
/// let mut words = Tree::new();
/// words.insert("noun", "Rex");
///
/// let story = fill("[noun] ate [noun]'s [verb].", &["noun", "verb"], &words);
/// assert_eq!(story, "Rex ate [noun]'s .");
/// ```
pub fn fill(template: &str, categories: &[&str], words: &Tree) -> String {
    let mut story = template.to_string();
    for category in categories {
        let placeholder = format!("[{}]", category);
        if let Some(start) = story.find(&placeholder) {
            let word = words.find(category).unwrap_or_default();
            story.replace_range(start..start + placeholder.len(), word);
        }
    }

    story
}

/// One `category: word` line per entry.
pub fn render_traversal<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    entries
        .into_iter()
        .map(|(category, word)| format!("{}: {}\n", category, word))
        .collect()
}

/// Plays a full round: collect the words, tell the story, show the tree every which way, then
/// delete a category of the user's choosing.
pub fn run<R, W>(console: &mut Console<R, W>) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    console.say("Hello! Welcome to my Mad Libs game!")?;
    console.say("We're going to create a story based on your input.")?;
    console.say("Prepare your 3 words:")?;
    console.say("NOTE: the first word will be the name of a person")?;

    let mut words = Tree::new();
    for (i, category) in CATEGORIES.iter().enumerate() {
        let word = console.ask(&format!("{}) Enter a word ({}): ", i + 1, category))?;
        words.insert(*category, word);
    }
    info!(words = words.len(), "collected words");

    console.say(format!(
        "\nHere's your Mad Libs story:\n{}",
        fill(STORY, &CATEGORIES, &words)
    ))?;

    for order in [Order::In, Order::Pre, Order::Post] {
        console.say(format!(
            "\n{} Traversal:\n{}",
            order,
            render_traversal(words.traverse(order))
        ))?;
    }

    let category = console.ask("Enter a word type to delete: ")?;
    match words.delete(&category) {
        Some(word) => console.say(format!("Deleted {} ({}).", category, word))?,
        None => console.say(format!("No word of type {:?} was found.", category))?,
    }
    console.say(format!(
        "New Inorder Traversal:\n{}",
        render_traversal(&words)
    ))
}
