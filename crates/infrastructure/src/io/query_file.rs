use ferrous_qtype_domain::DomainError;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use tracing::debug;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Opens a `<domain> <qtype>` query file for buffered reading.
///
/// Typically produced by
/// `tshark -r capture.pcap -Y "udp.dstport == 53" -T fields -e dns.qry.name -e dns.qry.type`.
pub fn open_query_file(path: impl AsRef<Path>) -> Result<BufReader<File>, DomainError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::InputNotFound(path.display().to_string()),
        _ => DomainError::InputUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    })?;

    debug!(path = %path.display(), "Opened query file");
    Ok(BufReader::with_capacity(READ_BUFFER_SIZE, file))
}
