// Resume text extraction — the collaborator feeding the scoring core.
//
// The one hard rule in here: extraction failures never propagate into the
// scoring call. An unreadable, oversized, or unsupported file becomes an
// empty string, which the vectorizer turns into a zero vector and a score
// of 0. The batch always completes.

pub mod reader;
