/// Space-delimited membership test for extension strings.
///
/// Match boundaries are checked on both sides so that one extension name
/// being a prefix of another (`EGL_KHR_image` vs `EGL_KHR_image_base`) never
/// produces a false positive.
pub fn supports_extension(extension_string: &str, extension: &str) -> bool {
    // extension names never contain spaces
    if extension.is_empty() || extension.contains(' ') {
        return false;
    }

    let mut start = 0;
    while let Some(position) = extension_string[start..].find(extension) {
        let begin = start + position;
        let end = begin + extension.len();

        let boundary_before = begin == 0 || extension_string.as_bytes()[begin - 1] == b' ';
        let boundary_after =
            end == extension_string.len() || extension_string.as_bytes()[end] == b' ';
        if boundary_before && boundary_after {
            return true;
        }

        start = end;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_names_only() {
        assert!(supports_extension("GL_ARB_foo GL_ARB_bar", "GL_ARB_foo"));
        assert!(!supports_extension("GL_ARB_foobar", "GL_ARB_foo"));
        assert!(supports_extension("GL_ARB_foo GL_ARB_foobar", "GL_ARB_foobar"));
        assert!(supports_extension("GL_ARB_foobar GL_ARB_foo", "GL_ARB_foo"));
    }

    #[test]
    fn rejects_malformed_queries() {
        assert!(!supports_extension("", "GL_ARB_foo"));
        assert!(!supports_extension("GL_ARB_foo", ""));
        // a needle containing a space is never legal, even when the raw
        // substring search would come back positive
        assert!(!supports_extension("GL_ARB_foo", "GL ARB_foo"));
    }

    #[test]
    fn matches_at_every_list_position() {
        let list = "EGL_KHR_image EGL_KHR_image_base EGL_KHR_fence_sync";
        assert!(supports_extension(list, "EGL_KHR_image"));
        assert!(supports_extension(list, "EGL_KHR_image_base"));
        assert!(supports_extension(list, "EGL_KHR_fence_sync"));
        assert!(!supports_extension(list, "EGL_KHR_fence"));
        assert!(!supports_extension(list, "KHR_image"));
    }
}
