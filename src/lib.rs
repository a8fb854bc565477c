/*!
# License Swap

Bulk rewriting of the leading license comment of source files. Given an
"old" and a "new" exemplar file, every candidate file whose header is
similar enough to the old exemplar's header gets the new header instead,
rendered in the comment style the file already uses.

## Pipeline

```text
source file ──► header::extract_header ──► similarity::similarity(body, old body)
                                                   │ score >= threshold
                                                   ▼
               header::replace_header ◄── header::format_header(new body, file style)
```

- **Header extraction** understands consecutive `//` lines and a single
  `/* ... */` block, after an optional BOM and leading blank lines.
- **Similarity** lowercases, strips banner characters, collapses
  whitespace and scores with a matching-blocks sequence ratio.
- **Replacement** splices the rendered header in place of the old one.

## Usage

### CLI
```bash
license-swap --dir ./src \
    --source-exemplar old_header.c \
    --target-exemplar new_header.c \
    --recursive --threshold 0.8
```

### Library
```rust,no_run
use license_swap::{relicense_directory, RelicenseConfig, SilentObserver};
use std::path::Path;

let summary = relicense_directory(
    Path::new("./src"),
    Path::new("old_header.c"),
    Path::new("new_header.c"),
    RelicenseConfig::default(),
    &mut SilentObserver,
)?;
println!("{}", summary);
# Ok::<(), license_swap::LicenseSwapError>(())
```
*/

pub mod cli_common;
pub mod core;
pub mod header;
pub mod relicense;
pub mod similarity;

pub use crate::core::{LicenseSwapError, Result};
pub use header::{extract_header, format_header, replace_header, Header, HeaderStyle};
pub use relicense::{
    Exemplars, FileOutcome, RelicenseConfig, Relicenser, RunObserver, RunSummary, SilentObserver,
};
pub use similarity::{normalize, similarity};

use std::path::Path;

/// Relicense every candidate file under `dir`.
///
/// Setup is checked before any candidate is read: the configuration, the
/// directory, then the source and target exemplar headers.
pub fn relicense_directory(
    dir: &Path,
    source_exemplar: &Path,
    target_exemplar: &Path,
    config: RelicenseConfig,
    observer: &mut dyn RunObserver,
) -> Result<RunSummary> {
    config.validate()?;
    relicense::ensure_directory(dir)?;
    let exemplars = Exemplars::load(source_exemplar, target_exemplar)?;

    Relicenser::new(config, exemplars).run(dir, observer)
}
