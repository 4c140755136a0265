//! Identifier formatting and sec.gov document links

/// Root of the EDGAR document archive
pub const EDGAR_ARCHIVES_BASE: &str = "https://www.sec.gov/Archives/edgar/data";

/// Fixed width of a zero-padded CIK
pub const CIK_WIDTH: usize = 10;

/// Left-pad a raw CIK with zeros to [`CIK_WIDTH`] characters.
/// Longer values are returned unchanged.
pub fn pad_cik(raw: &str) -> String {
	format!("{:0>width$}", raw.trim(), width = CIK_WIDTH)
}

/// Strip zero padding from a CIK, keeping a single `0` for an all-zero value
pub fn unpadded_cik(cik: &str) -> &str {
	let cik = cik.trim();
	let stripped = cik.trim_start_matches('0');
	if stripped.is_empty() && !cik.is_empty() {
		"0"
	} else {
		stripped
	}
}

/// Accession number with the hyphens removed, as used in archive paths
pub fn accession_without_dashes(accession_number: &str) -> String {
	accession_number
		.trim()
		.chars()
		.filter(|c| *c != '-')
		.collect()
}

/// `https://www.sec.gov/Archives/edgar/data/{cik}/{accessionNoDashes}/{fileNumber}`
pub fn document_url(cik: &str, accession_number: &str, file_number: &str) -> String {
	format!(
		"{}/{}/{}/{}",
		EDGAR_ARCHIVES_BASE,
		unpadded_cik(cik),
		accession_without_dashes(accession_number),
		file_number.trim()
	)
}
