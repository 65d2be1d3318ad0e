use anyhow::{Result, bail};

use crate::models::{LogDate, PeerFolder};

/// Parse a Fire session folder name of the form `<peer>-<serviceTag>`
///
/// Splits on the first `-`, so peers whose service tag itself contains a `-`
/// keep only the leading segment as the peer identifier, matching Fire's own
/// naming.
///
/// # Errors
///
/// Returns an error if the name contains no `-` separator or if the peer part
/// is empty. Both indicate a directory that was never written by Fire.
///
/// # Examples
///
/// ```
/// use fire2adium::parse_folder_name;
///
/// let parsed = parse_folder_name("alice-AIM")?;
/// assert_eq!(parsed.peer, "alice");
/// assert_eq!(parsed.service_tag, "AIM");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_folder_name(name: &str) -> Result<PeerFolder> {
    let Some((peer, service_tag)) = name.split_once('-') else {
        bail!("Folder name has no '-' separator: {}", name);
    };

    if peer.is_empty() {
        bail!("Folder name has an empty peer identifier: {}", name);
    }

    Ok(PeerFolder { peer: peer.to_string(), service_tag: service_tag.to_string() })
}

/// Parse a Fire log filename of the form `<year>-<month>-<day>,<suffix>`
///
/// The substring before the first `,` is the date token; it must split on `-`
/// into exactly three components.
///
/// # Errors
///
/// Returns an error if the filename has no `,`, or if the date token does not
/// have exactly three `-`-separated parts (e.g. `"2012,chat.html"` or
/// `"2012-01-02-03,chat.html"`).
///
/// # Examples
///
/// ```
/// use fire2adium::parse_log_filename;
///
/// let date = parse_log_filename("2011-05-09,log1.html")?;
/// assert_eq!(date.year, "2011");
/// assert_eq!(date.month, "05");
/// assert_eq!(date.day, "09");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn parse_log_filename(name: &str) -> Result<LogDate> {
    let Some((date_token, _suffix)) = name.split_once(',') else {
        bail!("Log filename has no ',' separator: {}", name);
    };

    let parts: Vec<&str> = date_token.split('-').collect();
    if parts.len() != 3 {
        bail!(
            "Date token {:?} in {} has {} parts, expected year-month-day",
            date_token,
            name,
            parts.len()
        );
    }

    Ok(LogDate {
        year: parts[0].to_string(),
        month: parts[1].to_string(),
        day: parts[2].to_string(),
    })
}

/// Build the Adium log filename for a peer and date: `peer (year|month|day).html`
pub fn destination_filename(peer: &str, date: &LogDate) -> String {
    format!("{} ({}|{}|{}).html", peer, date.year, date.month, date.day)
}
