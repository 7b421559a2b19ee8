//! File extension and MIME type datasets.

pub static FILE_EXTENSIONS: &[&str] = &[
    ".txt", ".pdf", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".csv", ".json", ".xml",
    ".html", ".css", ".js", ".py", ".rs", ".md", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".bmp",
    ".mp3", ".wav", ".mp4", ".avi", ".mkv", ".zip", ".tar", ".gz", ".7z", ".sql", ".log", ".yaml",
];

pub static MIME_TYPES: &[&str] = &[
    "text/plain",
    "text/html",
    "text/css",
    "text/csv",
    "text/markdown",
    "application/json",
    "application/xml",
    "application/pdf",
    "application/zip",
    "application/gzip",
    "application/sql",
    "application/javascript",
    "application/octet-stream",
    "application/msword",
    "application/vnd.ms-excel",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    "image/png",
    "image/jpeg",
    "image/gif",
    "image/svg+xml",
    "image/webp",
    "image/bmp",
    "audio/mpeg",
    "audio/wav",
    "audio/ogg",
    "video/mp4",
    "video/webm",
    "video/x-matroska",
];
