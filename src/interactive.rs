use std::io::{self, BufRead, Write};

use crate::commands::{reconstruct_from_store, split_to_store};
use crate::store::{ShareId, ShareStore};

const MENU: &str = "\n1) Split secret   2) Reconstruct by share numbers   q) Quit";
const DEFAULT_THRESHOLD: usize = 2;
const DEFAULT_TOTAL: usize = 3;

struct Session<'a, S: ShareStore + ?Sized, R, W> {
    store: &'a mut S,
    input: R,
    output: W,
}

impl<'a, S, R, W> Session<'a, S, R, W>
where
    S: ShareStore + ?Sized,
    R: BufRead,
    W: Write,
{
    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn number_or(&mut self, label: &str, default: usize) -> io::Result<Option<Result<usize, ()>>> {
        Ok(self.prompt(label)?.map(|answer| {
            let answer = answer.trim();
            if answer.is_empty() {
                Ok(default)
            } else {
                answer.parse::<usize>().map_err(|_| ())
            }
        }))
    }

    /// Returns `false` when input ran out mid-dialogue.
    fn split(&mut self) -> io::Result<bool> {
        let Some(secret) = self.prompt("Enter secret: ")? else {
            return Ok(false);
        };
        if secret.is_empty() {
            writeln!(self.output, "Empty secret")?;
            return Ok(true);
        }

        let Some(threshold) = self.number_or("Threshold [2]: ", DEFAULT_THRESHOLD)? else {
            return Ok(false);
        };
        let Some(total) = self.number_or("Total shares [3]: ", DEFAULT_TOTAL)? else {
            return Ok(false);
        };
        let (Ok(threshold), Ok(total)) = (threshold, total) else {
            writeln!(self.output, "Threshold and total must be integers")?;
            return Ok(true);
        };

        match split_to_store(&mut *self.store, &secret, threshold, total) {
            Ok(shares) => writeln!(
                self.output,
                "Saved {} shares in '{}' (threshold {}).",
                shares.len(),
                self.store.location(),
                threshold
            )?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn reconstruct(&mut self) -> io::Result<bool> {
        writeln!(self.output, "Enter share numbers separated by spaces (e.g. 1 2):")?;
        let Some(line) = self.prompt("Shares: ")? else {
            return Ok(false);
        };
        let line = line.trim();
        if line.is_empty() {
            writeln!(self.output, "No shares entered")?;
            return Ok(true);
        }

        let numbers: Result<Vec<i64>, _> = line.split_whitespace().map(str::parse).collect();
        let Ok(numbers) = numbers else {
            writeln!(self.output, "Enter numbers only")?;
            return Ok(true);
        };

        let recovered = numbers
            .into_iter()
            .map(ShareId::index)
            .collect::<Result<Vec<_>, _>>()
            .and_then(|ids| reconstruct_from_store(&*self.store, &ids, false));
        match recovered {
            Ok(secret) => writeln!(self.output, "Reconstructed secret: {}", secret)?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choose: ")? else {
                return Ok(());
            };
            let keep_going = match choice.trim() {
                "1" => self.split()?,
                "2" => self.reconstruct()?,
                other if other.eq_ignore_ascii_case("q") || other.eq_ignore_ascii_case("quit") => {
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Unknown option")?;
                    true
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }
}

/// Runs the split/reconstruct menu until the user quits or `input` ends.
/// Sharing errors are reported on `output` and the menu continues.
pub fn run<S, R, W>(store: &mut S, input: R, output: W) -> io::Result<()>
where
    S: ShareStore + ?Sized,
    R: BufRead,
    W: Write,
{
    Session {
        store,
        input,
        output,
    }
    .run()
}
