use crate::SAMPLE_EXTENSION;

use tracing::warn;

/// Fields encoded in a `<Instrument>_<BPM>_<Key>_<ChordProgression>.mp3` file name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleName {
    pub sound_name: String,
    pub instrument_name: String,
    pub bpm: String,
    pub key: String,
    pub chord_progression: String,
}

fn strip_extension(s: &str) -> String {
    s.replace(SAMPLE_EXTENSION, "")
}

/// Parse a base file name. Names with two or fewer underscore segments are
/// not sample names and yield `None`; extra segments past the fourth are ignored.
pub fn parse_sample_name(file_name: &str) -> Option<SampleName> {
    let parts: Vec<&str> = file_name.split('_').collect();
    if parts.len() <= 2 {
        return None;
    }

    let chord_progression = match parts.get(3) {
        Some(part) => strip_extension(part),
        None => {
            warn!(
                "Sample name {:?} has no chord progression segment",
                file_name
            );
            String::new()
        }
    };

    Some(SampleName {
        sound_name: strip_extension(file_name),
        instrument_name: parts[0].to_string(),
        bpm: parts[1].to_string(),
        key: parts[2].to_string(),
        chord_progression,
    })
}
