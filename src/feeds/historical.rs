use super::Feed;
use crate::{Error, ImpulseMacd, ImpulseValue, Number, PriceBar, MAX_PRICE};
use async_trait::async_trait;
use std::path::PathBuf;

/// Replays bars stored in a local file.
///
/// Files ending in `.bin` hold a bincode encoded list of bars. Anything else is
/// read as UTF-8 text with one `high,low,close` bar per line; invalid UTF-8 is
/// reported as an io error.
pub struct Historical {
    path: PathBuf,
}

impl Historical {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Vec<PriceBar>, Error> {
        let bars = if self.path.extension().map_or(false, |ext| ext == "bin") {
            let bin = tokio::fs::read(&self.path).await?;
            bincode::deserialize(&bin[..])?
        } else {
            parse(&tokio::fs::read_to_string(&self.path).await?)?
        };

        log::info!("Loaded {} bars from {}", bars.len(), self.path.display());
        Ok(bars)
    }
}

#[async_trait]
impl Feed for Historical {
    async fn run(self, impulse: &mut ImpulseMacd) -> Result<Vec<ImpulseValue>, Error> {
        let bars = self.load().await?;
        impulse.run_batch(&bars)
    }
}

/// Blank lines and lines starting with `#` are skipped.
pub fn parse(text: &str) -> Result<Vec<PriceBar>, Error> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, content)| parse_line(content).map_err(|reason| Error::Parse { line, reason }))
        .collect()
}

fn parse_line(line: &str) -> Result<PriceBar, String> {
    let fields = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|field| !field.is_empty())
        .map(|field| {
            let price = field
                .parse::<Number>()
                .map_err(|err| format!("{:?}: {}", field, err))?;
            if PriceBar::is_valid_price(price) {
                Ok(price)
            } else {
                Err(format!("{:?}: not a finite price within {:e}", field, MAX_PRICE))
            }
        })
        .collect::<Result<Vec<Number>, String>>()?;

    match fields[..] {
        [high, low, close] => Ok(PriceBar::new(high, low, close)),
        _ => Err(format!("expected 3 fields, found {}", fields.len())),
    }
}
