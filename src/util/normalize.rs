/// Maximum length of a normalized name, counted in characters.
const MAX_NAME_CHARS: usize = 32;

/// Normalizes a voice channel name into a Discord text channel slug.
///
/// Strips everything except ASCII letters, digits, hyphens and spaces, keeps at most the
/// first 32 characters, lowercases, and replaces spaces with hyphens. Never fails; a name
/// made only of disallowed characters normalizes to an empty string.
///
/// # Arguments
/// - `name` - Display name of the voice channel
///
/// # Returns
/// - `String` - Slug suitable for a text channel name
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == ' ')
        .take(MAX_NAME_CHARS)
        .map(|c| match c {
            ' ' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Builds the companion text channel name for a voice channel.
pub fn companion_channel_name(prefix: &str, voice_channel_name: &str) -> String {
    format!("{}{}", prefix, normalize(voice_channel_name))
}
