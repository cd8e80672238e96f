//! Splits raw command-line tokens into options and file paths.

use log::debug;

/// Command-line tokens partitioned by whether they start with a dash.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    pub options: Vec<String>,
    pub files: Vec<String>,
}

/// Classifies every argument as an option (first character is `-`) or a file.
///
/// Relative order is preserved within each sequence. An empty argument has no
/// first character and is treated as a file.
///
/// # Examples
///
/// ```
/// use cat_core::arguments::classify;
///
/// let arguments = classify(["a.txt", "-n", "b.txt"]);
/// assert_eq!(arguments.options, vec!["-n"]);
/// assert_eq!(arguments.files, vec!["a.txt", "b.txt"]);
/// ```
pub fn classify<I, S>(raw: I) -> Arguments
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (options, files): (Vec<String>, Vec<String>) = raw
        .into_iter()
        .map(Into::into)
        .partition(|argument| argument.starts_with('-'));

    debug!("Classified options: {options:?}, files: {files:?}");

    Arguments { options, files }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_empty() {
        let arguments = classify(Vec::<String>::new());
        assert_eq!(arguments, Arguments::default());
    }

    #[test]
    fn test_classify_interleaved_preserves_order() {
        let arguments = classify(["-b", "one.txt", "--number", "two.txt", "-x", "three"]);
        assert_eq!(arguments.options, vec!["-b", "--number", "-x"]);
        assert_eq!(arguments.files, vec!["one.txt", "two.txt", "three"]);
    }

    #[test]
    fn test_classify_partitions_without_loss() {
        let raw = vec!["a", "-", "--", "b-c", "-dash", "", "c"];
        let arguments = classify(raw.clone());

        assert_eq!(arguments.options.len() + arguments.files.len(), raw.len());

        // Re-merging by walking the raw list recovers the original sequence
        let mut options = arguments.options.iter();
        let mut files = arguments.files.iter();
        let merged: Vec<String> = raw
            .iter()
            .map(|argument| {
                if argument.starts_with('-') {
                    options.next().unwrap().clone()
                } else {
                    files.next().unwrap().clone()
                }
            })
            .collect();
        assert_eq!(merged, raw);
        assert!(options.next().is_none());
        assert!(files.next().is_none());
    }

    #[test]
    fn test_classify_empty_argument_is_a_file() {
        let arguments = classify(["", "-n"]);
        assert_eq!(arguments.files, vec![""]);
        assert_eq!(arguments.options, vec!["-n"]);
    }

    #[test]
    fn test_classify_dash_inside_name_is_a_file() {
        let arguments = classify(["my-file.txt", "./-n"]);
        assert!(arguments.options.is_empty());
        assert_eq!(arguments.files, vec!["my-file.txt", "./-n"]);
    }
}
